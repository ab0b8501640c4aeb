//! Server Settings
//!
//! Defaults, overridden by an optional `server.toml`, overridden by
//! environment variables.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Listen address, `host:port`
    pub bind_addr: String,
    /// Optional catalog seed file; the built-in sample set is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Directory with the built frontend, served as static files
    pub static_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            catalog_path: None,
            static_dir: "dist".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        apply_file_config(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("GAMELIST_BIND") {
        settings.bind_addr = v;
    }
    if let Ok(v) = std::env::var("GAMELIST_CATALOG") {
        settings.catalog_path = Some(PathBuf::from(v));
    }
    if let Ok(v) = std::env::var("GAMELIST_STATIC_DIR") {
        settings.static_dir = PathBuf::from(v);
    }

    settings
}

fn apply_file_config(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.bind_addr = v.clone();
    }
    if let Some(v) = file_cfg.get("catalog_path") {
        settings.catalog_path = Some(PathBuf::from(v));
    }
    if let Some(v) = file_cfg.get("static_dir") {
        settings.static_dir = PathBuf::from(v);
    }
}
