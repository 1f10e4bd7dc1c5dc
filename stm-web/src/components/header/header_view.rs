use std::cell::Cell;
use std::rc::Rc;

use leptos::*;
use log::{debug, warn};

use crate::session::{HostEnvironment, SessionQuery};
use crate::SessionError;

/// Login state of the page header and its logout action.
///
/// `is_logged_in` is written once per activation by [`initialize`] and is
/// not refreshed afterwards; a logout reloads the page, which replaces the
/// view and its state.
///
/// [`initialize`]: HeaderView::initialize
#[derive(Clone)]
pub struct HeaderView {
    session: Rc<dyn SessionQuery>,
    host: Rc<dyn HostEnvironment>,
    is_logged_in: RwSignal<bool>,
    initialized: Rc<Cell<bool>>,
}

impl HeaderView {
    pub fn new(
        session: Rc<dyn SessionQuery>,
        host: Rc<dyn HostEnvironment>,
    ) -> Self {
        Self {
            session,
            host,
            is_logged_in: create_rw_signal(false),
            initialized: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_logged_in(&self) -> Signal<bool> {
        self.is_logged_in.into()
    }

    /// Queries the session once. Errors are returned to the caller and
    /// leave the view logged out. A second call on the same view fails
    /// without querying again.
    pub async fn initialize(&self) -> Result<(), SessionError> {
        if self.initialized.replace(true) {
            return Err(SessionError::AlreadyInitialized);
        }
        let logged_in = self.session.is_authenticated().await?;
        debug!("Session authenticated: {}", logged_in);
        self.is_logged_in.set(logged_in);
        Ok(())
    }

    /// Signs out, then reloads the page. The reload happens even when
    /// signing out fails.
    pub async fn logout(&self) {
        if let Err(err) = self.session.sign_out().await {
            warn!("Sign out failed, reloading anyway: {}", err);
        }
        self.host.reload_current_view();
    }
}
