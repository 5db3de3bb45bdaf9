use serde::{Deserialize, Serialize};
use statusbar_core::StatusBarError;

/// 8-bit RGBA colour, the status bar background fill value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const RED:   Self = Self::rgb(0xff, 0x00, 0x00);
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parse a CSS-style hex color string.
    ///
    /// Accepts `RGB`, `RRGGBB` and `RRGGBBAA` forms, with or without a
    /// leading `#`. The 3-digit form expands each digit (`#abc` → `#aabbcc`),
    /// matching what the historical JS wrapper did before dispatching.
    pub fn from_hex(hex: &str) -> Result<Self, StatusBarError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let invalid = || StatusBarError::InvalidColor(hex.to_string());

        // Length is matched in bytes and the arms slice by byte index, so
        // multi-byte input must be rejected before it can split a char.
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        let nibble = |s: &str| {
            u8::from_str_radix(s, 16)
                .map(|n| n << 4 | n)
                .map_err(|_| invalid())
        };

        match digits.len() {
            3 => Ok(Self::rgb(
                nibble(&digits[0..1])?,
                nibble(&digits[1..2])?,
                nibble(&digits[2..3])?,
            )),
            6 => Ok(Self::rgb(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
            )),
            8 => Ok(Self {
                r: byte(&digits[0..2])?,
                g: byte(&digits[2..4])?,
                b: byte(&digits[4..6])?,
                a: byte(&digits[6..8])?,
            }),
            _ => Err(invalid()),
        }
    }

    /// Serialize back to a hex string: `#rrggbb`, or `#rrggbbaa` when the
    /// color is not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// WCAG relative luminance in `[0, 1]`, ignoring alpha.
    #[must_use]
    pub fn luminance(self) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// Whether a status bar drawn over this background needs light foreground
    /// content to stay legible (luminance below 0.5).
    #[must_use]
    pub fn prefers_light_content(self) -> bool {
        self.luminance() < 0.5
    }
}
