use std::rc::Rc;

use crate::session::{
    BrowserHost, BrowserSession, HostEnvironment, SessionQuery,
};

/// Capabilities shared with components through the Leptos context.
#[derive(Clone)]
pub struct GlobalState {
    session: Rc<dyn SessionQuery>,
    host: Rc<dyn HostEnvironment>,
}

impl GlobalState {
    pub fn new(
        session: Rc<dyn SessionQuery>,
        host: Rc<dyn HostEnvironment>,
    ) -> Self {
        Self { session, host }
    }

    pub fn session(&self) -> Rc<dyn SessionQuery> {
        Rc::clone(&self.session)
    }

    pub fn host(&self) -> Rc<dyn HostEnvironment> {
        Rc::clone(&self.host)
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new(
            Rc::new(BrowserSession::from_config()),
            Rc::new(BrowserHost),
        )
    }
}
