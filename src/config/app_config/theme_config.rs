use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Configuration for theme settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// Theme used at startup: "auto", "light" or "dark"
    pub default_theme: Theme,
}
