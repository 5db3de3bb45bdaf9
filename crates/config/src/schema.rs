use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `statusbar.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PluginConfig {
    /// Initial system-bar appearance applied when the controller attaches.
    pub appearance: AppearanceConfig,
}

/// Appearance applied on attach (and re-applied on live config reload).
///
/// Mirrors the host preferences the plugin historically honoured: initial
/// style, status/navigation bar backgrounds, overlay mode, and visibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Foreground style: `"default"` or `"lightcontent"`.
    pub style: String,
    /// Status bar background color (hex, e.g. `"#ffffff"`).
    pub background: String,
    /// Navigation bar background color (hex).
    pub navigation_background: String,
    /// When `true`, content extends under the system bars and the status bar
    /// background is drawn transparent.
    pub overlays_content: bool,
    /// Initial status bar visibility.
    pub visible: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        // The original attach sequence painted both system bars white and
        // kept the bar visible without overlay.
        Self {
            style: "default".to_string(),
            background: "#ffffff".to_string(),
            navigation_background: "#ffffff".to_string(),
            overlays_content: false,
            visible: true,
        }
    }
}
