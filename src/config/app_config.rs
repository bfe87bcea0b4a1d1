use serde::{Deserialize, Serialize};

mod auth_config;
mod startup_config;
mod theme_config;
mod window_config;

pub use auth_config::AuthConfig;
pub use startup_config::StartupConfig;
pub use theme_config::ThemeConfig;
pub use window_config::WindowConfig;

/// Global application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub auth: AuthConfig,
    pub startup: StartupConfig,
    pub theme: ThemeConfig,
    pub window: WindowConfig,
}

#[cfg(test)]
mod tests {
    use super::startup_config::DEFAULT_SPLASH_DELAY_MS;
    use super::window_config::MIN_WINDOW_DIMENSION;
    use super::*;
    use crate::theme::Theme;
    use std::time::Duration;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.auth.simulated_delay_ms, 1000);
        assert_eq!(config.auth.simulated_delay(), Duration::from_secs(1));
        assert_eq!(config.startup.splash_delay_ms, 500);
        assert_eq!(config.startup.splash_delay(), Duration::from_millis(500));
        assert_eq!(config.theme.default_theme, Theme::Auto);
        assert_eq!(config.window.width, 420);
        assert_eq!(config.window.height, 820);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "auth": { "simulatedDelayMs": 0 } }"#).unwrap();

        assert_eq!(config.auth.simulated_delay_ms, 0);
        assert_eq!(config.startup.splash_delay_ms, DEFAULT_SPLASH_DELAY_MS);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_config_empty_sections_use_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "auth": {}, "startup": {}, "window": {} }"#).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config {
            auth: AuthConfig {
                simulated_delay_ms: 250,
            },
            startup: StartupConfig {
                splash_delay_ms: 0,
            },
            theme: ThemeConfig {
                default_theme: Theme::Dark,
            },
            window: WindowConfig {
                width: 390,
                height: 844,
            },
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"simulatedDelayMs\": 250"));
        assert!(json.contains("\"defaultTheme\": \"dark\""));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_window_size_clamped() {
        let window = WindowConfig {
            width: 10,
            height: 1000,
        };
        assert_eq!(window.clamped_size(), (MIN_WINDOW_DIMENSION, 1000));
    }
}
