use std::fmt;

use async_trait::async_trait;
use log::{debug, error};
use web_sys::Storage;

use super::{HostEnvironment, SessionQuery};
use crate::vars::{SESSION_STORAGE_AREA, SESSION_TOKEN_KEY};
use crate::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    SessionStorage,
    LocalStorage,
}

impl fmt::Display for StorageArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageArea::SessionStorage => write!(f, "sessionStorage"),
            StorageArea::LocalStorage => write!(f, "localStorage"),
        }
    }
}

/// Session kept in browser Web Storage. A session exists when the token
/// key holds a non-empty value.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    area: StorageArea,
    token_key: String,
}

impl BrowserSession {
    pub fn new(area: StorageArea, token_key: &str) -> Self {
        Self {
            area,
            token_key: token_key.to_string(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(SESSION_STORAGE_AREA, SESSION_TOKEN_KEY)
    }

    pub fn area(&self) -> StorageArea {
        self.area
    }

    pub fn token_key(&self) -> &str {
        &self.token_key
    }

    fn storage(&self) -> Result<Storage, SessionError> {
        let window =
            web_sys::window().ok_or(SessionError::WindowUnavailable)?;
        let storage = match self.area {
            StorageArea::SessionStorage => window.session_storage(),
            StorageArea::LocalStorage => window.local_storage(),
        };
        storage?.ok_or_else(|| {
            SessionError::StorageUnavailable(self.area.to_string())
        })
    }
}

#[async_trait(?Send)]
impl SessionQuery for BrowserSession {
    async fn is_authenticated(&self) -> Result<bool, SessionError> {
        let token = self.storage()?.get_item(&self.token_key)?;
        Ok(token.map_or(false, |token| !token.is_empty()))
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        self.storage()?.clear()?;
        debug!("Cleared {}", self.area);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl HostEnvironment for BrowserHost {
    fn reload_current_view(&self) {
        match web_sys::window() {
            Some(window) => {
                if let Err(err) = window.location().reload() {
                    error!("Failed to reload page: {:?}", err);
                }
            }
            None => error!("Failed to reload page: window is not available"),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn put_item(area: StorageArea, key: &str, value: &str) {
        let window = web_sys::window().unwrap();
        let storage = match area {
            StorageArea::SessionStorage => window.session_storage(),
            StorageArea::LocalStorage => window.local_storage(),
        };
        storage.unwrap().unwrap().set_item(key, value).unwrap();
    }

    #[wasm_bindgen_test]
    async fn test_is_authenticated_with_token() {
        let session = BrowserSession::new(
            StorageArea::SessionStorage,
            "test_is_authenticated_with_token",
        );
        put_item(session.area(), session.token_key(), "token-value");

        assert_eq!(session.is_authenticated().await, Ok(true));

        session.sign_out().await.unwrap();
    }

    #[wasm_bindgen_test]
    async fn test_is_authenticated_without_token() {
        let session = BrowserSession::new(
            StorageArea::SessionStorage,
            "test_is_authenticated_without_token",
        );
        session.sign_out().await.unwrap();

        assert_eq!(session.is_authenticated().await, Ok(false));
    }

    #[wasm_bindgen_test]
    async fn test_empty_token_is_not_a_session() {
        let session = BrowserSession::new(
            StorageArea::SessionStorage,
            "test_empty_token_is_not_a_session",
        );
        put_item(session.area(), session.token_key(), "");

        assert_eq!(session.is_authenticated().await, Ok(false));

        session.sign_out().await.unwrap();
    }

    #[wasm_bindgen_test]
    async fn test_sign_out_clears_storage() {
        let session = BrowserSession::new(
            StorageArea::LocalStorage,
            "test_sign_out_clears_storage",
        );
        put_item(session.area(), session.token_key(), "token-value");
        put_item(session.area(), "test_sign_out_clears_storage_user", "{}");
        assert_eq!(session.is_authenticated().await, Ok(true));

        session.sign_out().await.unwrap();

        assert_eq!(session.is_authenticated().await, Ok(false));
        let storage = web_sys::window().unwrap().local_storage().unwrap();
        assert_eq!(storage.unwrap().length().unwrap(), 0);
    }
}
