mod browser;

use async_trait::async_trait;
pub use browser::{BrowserHost, BrowserSession, StorageArea};

use crate::SessionError;

/// Answers whether a user is signed in and clears the stored session.
#[async_trait(?Send)]
pub trait SessionQuery {
    async fn is_authenticated(&self) -> Result<bool, SessionError>;
    async fn sign_out(&self) -> Result<(), SessionError>;
}

/// Host page the application runs in.
pub trait HostEnvironment {
    /// Discards the current view and loads the page again. In a browser
    /// this does not return to a live view.
    fn reload_current_view(&self);
}
