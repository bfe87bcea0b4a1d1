//! Configuration loaded from `config.json` at startup.

mod app_config;

pub use app_config::*;

use anyhow::Context as _;
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Global configuration, initialized once by `init` before launch
pub static CONFIG: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::default()));

/// Default config file location
pub fn config_path() -> PathBuf {
    const FILENAME: &str = "config.json";
    if let Some(mut path) = dirs::config_dir() {
        path.push("hospitals-nearby");
        path.push(FILENAME);
        return path;
    }

    // Fallback to home directory
    if let Some(mut path) = dirs::home_dir() {
        path.push(".hospitals-nearby");
        path.push(FILENAME);
        return path;
    }

    PathBuf::from(FILENAME)
}

/// Read a config file. A missing file yields the defaults.
pub fn load_from(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Load the configuration into `CONFIG`.
///
/// Errors are logged and the defaults are kept; a broken config file never
/// prevents the app from starting.
pub fn init(path_override: Option<&Path>) {
    let path = path_override
        .map(Path::to_path_buf)
        .unwrap_or_else(config_path);

    let config = match load_from(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
            config
        }
        Err(e) => {
            tracing::warn!("Using default configuration: {e:#}");
            Config::default()
        }
    };

    *CONFIG.write() = config;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from(&temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "auth": { "simulatedDelayMs": 20 }, "theme": { "defaultTheme": "light" } }"#,
        )
        .unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.auth.simulated_delay_ms, 20);
        assert_eq!(config.theme.default_theme, Theme::Light);
        assert_eq!(config.startup, StartupConfig::default());
    }

    #[test]
    fn test_load_invalid_json_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_config_path_file_name() {
        assert!(config_path().ends_with("config.json"));
    }
}
