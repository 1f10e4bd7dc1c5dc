mod header;
mod logout_button;

pub use header::{Header, HeaderView};
pub use logout_button::LogoutButton;
