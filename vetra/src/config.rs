use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) catalog_path: PathBuf,
    pub(crate) schemas_path: PathBuf,
    pub(crate) cart_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: vetra_catalog::default_catalog_path(),
            schemas_path: vetra_catalog::default_schemas_path(),
            cart_path: default_cart_path(),
        }
    }
}

/// Optional overrides as stored on disk.
#[derive(Debug, Default, Deserialize)]
struct AppConfigFile {
    #[serde(default)]
    catalog_path: Option<PathBuf>,
    #[serde(default)]
    schemas_path: Option<PathBuf>,
    #[serde(default)]
    cart_path: Option<PathBuf>,
}

/// Load the config file, falling back to defaults.
///
/// A missing file is the normal first-run case; an unreadable or
/// invalid file degrades to defaults with a warning.
pub(crate) fn load_config() -> AppConfig {
    load_config_from_path(&config_path())
}

fn load_config_from_path(path: &Path) -> AppConfig {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                log::warn!("config read failed: {err}");
            }
            return AppConfig::default();
        },
    };

    let parsed: AppConfigFile = match serde_json::from_str(&data) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::warn!("config parse failed, using defaults: {err}");
            AppConfigFile::default()
        },
    };

    let defaults = AppConfig::default();
    AppConfig {
        catalog_path: parsed.catalog_path.unwrap_or(defaults.catalog_path),
        schemas_path: parsed.schemas_path.unwrap_or(defaults.schemas_path),
        cart_path: parsed.cart_path.unwrap_or(defaults.cart_path),
    }
}

fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn default_cart_path() -> PathBuf {
    config_dir().join("cart.json")
}

fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join("vetra");
    }

    std::env::temp_dir().join("vetra")
}
