use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Deserialize;

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Deserialize)]
struct Config {
    app_info: AppInfo,
    session: SessionSpec,
    links: Links,
    #[serde(default)]
    navigation: Vec<NavLink>,
}

#[derive(Debug, Deserialize)]
struct AppInfo {
    name: String,
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct SessionSpec {
    storage: String,
    token_key: String,
}

#[derive(Debug, Deserialize)]
struct Links {
    home: String,
    login: String,
    register: String,
}

#[derive(Debug, Deserialize)]
struct NavLink {
    label: String,
    href: String,
}

fn main() {
    println!("cargo:rerun-if-changed={}", CONFIG_FILE);

    let content = fs::read_to_string(CONFIG_FILE).unwrap();
    let config: Config = serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", CONFIG_FILE, e));

    let storage_area = match config.session.storage.as_str() {
        "session" => "SessionStorage",
        "local" => "LocalStorage",
        other => panic!(
            "Invalid session.storage '{}' in {}, expected session or local",
            other, CONFIG_FILE
        ),
    };

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("generated_config.rs");
    let mut f = File::create(&dest_path).unwrap();

    writeln!(f, "pub const APP_NAME: &str = {:?};", config.app_info.name)
        .unwrap();
    writeln!(
        f,
        "pub const APP_DISPLAY_NAME: &str = {:?};",
        config.app_info.display_name
    )
    .unwrap();
    writeln!(
        f,
        "pub const SESSION_STORAGE_AREA: StorageArea = StorageArea::{};",
        storage_area
    )
    .unwrap();
    writeln!(
        f,
        "pub const SESSION_TOKEN_KEY: &str = {:?};",
        config.session.token_key
    )
    .unwrap();
    writeln!(f, "pub const HOME_URL: &str = {:?};", config.links.home)
        .unwrap();
    writeln!(f, "pub const LOGIN_URL: &str = {:?};", config.links.login)
        .unwrap();
    writeln!(
        f,
        "pub const REGISTER_URL: &str = {:?};",
        config.links.register
    )
    .unwrap();

    let nav_links = config
        .navigation
        .iter()
        .map(|link| {
            format!(
                "    NavLink {{ label: {:?}, href: {:?} }},",
                link.label, link.href
            )
        })
        .collect::<Vec<String>>()
        .join("\n");
    writeln!(f, "pub const NAV_LINKS: &[NavLink] = &[\n{}\n];", nav_links)
        .unwrap();
}
