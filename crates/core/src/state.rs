use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StatusBarError;

/// Status bar foreground content style.
///
/// `Default` means dark icons/text (for light backgrounds); `LightContent`
/// means light icons/text (for dark backgrounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Default,
    LightContent,
}

impl Style {
    /// Canonical wire string, as exposed by the `_ready` payload.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::LightContent => "lightcontent",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = StatusBarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "lightcontent" | "light-content" => Ok(Self::LightContent),
            other => Err(StatusBarError::InvalidArgument(format!(
                "unknown style '{other}'"
            ))),
        }
    }
}

/// Edge distances (platform-native points) by which content must be inset to
/// avoid system UI. Owned by the OS window; never cached by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SafeAreaInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl SafeAreaInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Build insets, clamping negative edges to zero. The OS never reports a
    /// negative inset; clamping here keeps simulated inputs honest too.
    #[must_use]
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top: top.max(0.0),
            left: left.max(0.0),
            bottom: bottom.max(0.0),
            right: right.max(0.0),
        }
    }
}

/// Visibility/style snapshot returned by `ready()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarState {
    pub visible: bool,
    pub style: Style,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_round_trips_through_wire_strings() {
        assert_eq!("default".parse::<Style>().unwrap(), Style::Default);
        assert_eq!(
            "lightcontent".parse::<Style>().unwrap(),
            Style::LightContent
        );
        assert_eq!(
            "light-content".parse::<Style>().unwrap(),
            Style::LightContent
        );
        assert_eq!(Style::LightContent.as_str(), "lightcontent");
    }

    #[test]
    fn style_rejects_unknown_names() {
        assert!("translucent".parse::<Style>().is_err());
    }

    #[test]
    fn insets_clamp_negative_edges() {
        let insets = SafeAreaInsets::new(-1.0, 4.0, -0.5, 0.0);
        assert_eq!(insets, SafeAreaInsets::new(0.0, 4.0, 0.0, 0.0));
    }

    #[test]
    fn ready_payload_shape() {
        let state = BarState {
            visible: true,
            style: Style::LightContent,
        };
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"visible": true, "style": "lightcontent"})
        );
    }

    #[test]
    fn insets_payload_shape() {
        let json = serde_json::to_value(SafeAreaInsets::new(47.0, 0.0, 34.0, 0.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"top": 47.0, "left": 0.0, "bottom": 34.0, "right": 0.0})
        );
    }
}
