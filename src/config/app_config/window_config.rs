use serde::{Deserialize, Serialize};

/// Default window width in logical pixels (phone-sized)
pub const DEFAULT_WINDOW_WIDTH: u32 = 420;

/// Default window height in logical pixels (phone-sized)
pub const DEFAULT_WINDOW_HEIGHT: u32 = 820;

/// Smallest accepted window dimension
pub const MIN_WINDOW_DIMENSION: u32 = 240;

fn default_window_width() -> u32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_window_height() -> u32 {
    DEFAULT_WINDOW_HEIGHT
}

/// Desktop window size. Ignored by the mobile renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
}

impl WindowConfig {
    /// Width and height, each raised to at least `MIN_WINDOW_DIMENSION`
    pub fn clamped_size(&self) -> (u32, u32) {
        (
            self.width.max(MIN_WINDOW_DIMENSION),
            self.height.max(MIN_WINDOW_DIMENSION),
        )
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}
