pub(crate) mod base;
pub(crate) mod components;
pub(crate) mod vars;

pub mod app;
pub mod session;

pub use base::error::SessionError;
pub use base::state::GlobalState;
pub use components::{Header, HeaderView, LogoutButton};
