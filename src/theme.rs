use serde::{Deserialize, Serialize};

pub use dioxus_sdk_window::theme::Theme as DioxusTheme;

/// User-selectable color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the system color scheme
    #[default]
    Auto,
    Light,
    Dark,
}

impl Theme {
    /// Resolve to a concrete scheme. `system` is `None` when the platform
    /// cannot report one, in which case light is used.
    pub fn resolve(self, system: Option<DioxusTheme>) -> DioxusTheme {
        match self {
            Theme::Auto => system.unwrap_or(DioxusTheme::Light),
            Theme::Light => DioxusTheme::Light,
            Theme::Dark => DioxusTheme::Dark,
        }
    }
}

/// CSS class applied to the root element
pub fn css_class(theme: DioxusTheme) -> &'static str {
    match theme {
        DioxusTheme::Light => "theme-light",
        DioxusTheme::Dark => "theme-dark",
    }
}
