use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default simulated round-trip delay for login and signup
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1000;

fn default_simulated_delay_ms() -> u64 {
    DEFAULT_SIMULATED_DELAY_MS
}

/// Configuration for the simulated authentication flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    /// Delay before a login or signup is applied, in milliseconds
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl AuthConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}
