use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    WindowUnavailable,
    StorageUnavailable(String),
    Storage(String),
    AlreadyInitialized,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::WindowUnavailable => {
                write!(f, "Window object is not available")
            }
            SessionError::StorageUnavailable(area) => {
                write!(f, "Storage not available: {}", area)
            }
            SessionError::Storage(msg) => write!(f, "Storage error: {}", msg),
            SessionError::AlreadyInitialized => {
                write!(f, "Session state was already initialized")
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl From<JsValue> for SessionError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        SessionError::Storage(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SessionError::StorageUnavailable("sessionStorage".to_string())
                .to_string(),
            "Storage not available: sessionStorage"
        );
        assert_eq!(
            SessionError::Storage("quota exceeded".to_string()).to_string(),
            "Storage error: quota exceeded"
        );
        assert_eq!(
            SessionError::AlreadyInitialized.to_string(),
            "Session state was already initialized"
        );
    }
}
