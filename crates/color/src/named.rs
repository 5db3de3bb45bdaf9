use crate::colors::Color;
use statusbar_core::StatusBarError;

/// The fixed set of platform color names accepted by
/// `backgroundColorByName`, with the hex values the platform assigns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    DarkGray,
    LightGray,
    White,
    Gray,
    Red,
    Green,
    Blue,
    Cyan,
    Yellow,
    Magenta,
    Orange,
    Purple,
    Brown,
}

impl NamedColor {
    /// Resolve a color name (case-insensitive, e.g. `"darkGray"`).
    pub fn resolve(name: &str) -> Result<Self, StatusBarError> {
        match name.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "darkgray" => Ok(Self::DarkGray),
            "lightgray" => Ok(Self::LightGray),
            "white" => Ok(Self::White),
            "gray" => Ok(Self::Gray),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "cyan" => Ok(Self::Cyan),
            "yellow" => Ok(Self::Yellow),
            "magenta" => Ok(Self::Magenta),
            "orange" => Ok(Self::Orange),
            "purple" => Ok(Self::Purple),
            "brown" => Ok(Self::Brown),
            _ => Err(StatusBarError::InvalidColor(format!(
                "unknown color name '{name}'"
            ))),
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Black => Color::rgb(0x00, 0x00, 0x00),
            Self::DarkGray => Color::rgb(0x55, 0x55, 0x55),
            Self::LightGray => Color::rgb(0xaa, 0xaa, 0xaa),
            Self::White => Color::rgb(0xff, 0xff, 0xff),
            Self::Gray => Color::rgb(0x80, 0x80, 0x80),
            Self::Red => Color::rgb(0xff, 0x00, 0x00),
            Self::Green => Color::rgb(0x00, 0xff, 0x00),
            Self::Blue => Color::rgb(0x00, 0x00, 0xff),
            Self::Cyan => Color::rgb(0x00, 0xff, 0xff),
            Self::Yellow => Color::rgb(0xff, 0xff, 0x00),
            Self::Magenta => Color::rgb(0xff, 0x00, 0xff),
            Self::Orange => Color::rgb(0xff, 0x80, 0x00),
            Self::Purple => Color::rgb(0x80, 0x00, 0x80),
            Self::Brown => Color::rgb(0x99, 0x66, 0x33),
        }
    }
}
