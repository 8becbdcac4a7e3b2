//! On-disk configuration, `config.json` in the app config directory.
//!
//! Every field has a default; a missing or malformed file is never fatal.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Manager, Runtime};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    /// Page the content view opens on at startup.
    pub home_url: String,
    /// Global shortcut that toggles the URL bar, e.g. "ctrl+l".
    pub shortcut: String,
    /// Height of the URL bar strip in logical pixels. Must match the
    /// `--bar-height` value in ui/styles.css.
    pub bar_height: f64,
    /// How long the presentation layer's slide animation takes; focus
    /// handoff and transition bookkeeping wait this long.
    pub settle_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            home_url: "https://duckduckgo.com".to_string(),
            shortcut: default_shortcut().to_string(),
            bar_height: 40.0,
            settle_ms: 350,
        }
    }
}

#[cfg(target_os = "macos")]
fn default_shortcut() -> &'static str {
    "super+l"
}

#[cfg(not(target_os = "macos"))]
fn default_shortcut() -> &'static str {
    "ctrl+l"
}

impl AppConfig {
    /// Loads the config for this app install, seeding the file with
    /// defaults on first run.
    pub fn load<R: Runtime>(app: &AppHandle<R>) -> Self {
        match app.path().app_config_dir() {
            Ok(dir) => Self::load_or_init(&dir.join("config.json")),
            Err(e) => {
                log::warn!("config dir unavailable ({e}), using defaults");
                Self::default()
            }
        }
    }

    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(raw) => match serde_json::from_str(&raw) {
                    Ok(config) => return config,
                    Err(e) => log::warn!("failed to parse {}: {e}", path.display()),
                },
                Err(e) => log::warn!("failed to read {}: {e}", path.display()),
            }
            return Self::default();
        }

        let config = Self::default();
        if let Err(e) = config.write(path) {
            log::warn!("failed to seed {}: {e}", path.display());
        }
        config
    }

    fn write(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_seeded_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig::load_or_init(&path);
        assert_eq!(config.bar_height, 40.0);
        assert_eq!(config.settle_ms, 350);
        assert!(path.exists());

        // A second load reads the seeded file back.
        let reloaded = AppConfig::load_or_init(&path);
        assert_eq!(reloaded.home_url, config.home_url);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"home_url": "https://example.com"}"#).unwrap();

        let config = AppConfig::load_or_init(&path);
        assert_eq!(config.home_url, "https://example.com");
        assert_eq!(config.window.width, 1200.0);
        assert_eq!(config.settle_ms, 350);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let config = AppConfig::load_or_init(&path);
        assert_eq!(config.home_url, AppConfig::default().home_url);
    }
}
