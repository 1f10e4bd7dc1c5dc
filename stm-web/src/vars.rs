use crate::session::StorageArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

// auto-generated via build.rs from config.yaml:
// - APP_NAME, APP_DISPLAY_NAME
// - SESSION_STORAGE_AREA, SESSION_TOKEN_KEY
// - HOME_URL, LOGIN_URL, REGISTER_URL
// - NAV_LINKS
include!(concat!(env!("OUT_DIR"), "/generated_config.rs"));
