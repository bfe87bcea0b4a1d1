use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time the splash (blank) screen is shown before the first screen
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 500;

fn default_splash_delay_ms() -> u64 {
    DEFAULT_SPLASH_DELAY_MS
}

/// Configuration for app startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupConfig {
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,
}

impl StartupConfig {
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: default_splash_delay_ms(),
        }
    }
}
