pub mod colors;
pub mod named;

pub use colors::Color;
pub use named::NamedColor;

use statusbar_config::AppearanceConfig;
use statusbar_core::Style;

/// Compiled appearance derived from [`AppearanceConfig`].
///
/// All colors are pre-parsed from hex strings into [`Color`] values.
/// Calling [`Appearance::from_config`] is infallible — invalid color or
/// style strings in the config fall back to safe defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub style: Style,
    pub background: Color,
    pub navigation_background: Color,
    pub overlays_content: bool,
    pub visible: bool,
}

impl Appearance {
    /// Build an [`Appearance`] from the config file's `[appearance]` section.
    pub fn from_config(cfg: &AppearanceConfig) -> Self {
        Self {
            style: cfg.style.parse().unwrap_or_default(),
            background: Color::from_hex(&cfg.background).unwrap_or(Color::WHITE),
            navigation_background: Color::from_hex(&cfg.navigation_background)
                .unwrap_or(Color::WHITE),
            overlays_content: cfg.overlays_content,
            visible: cfg.visible,
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::from_config(&AppearanceConfig::default())
    }
}
