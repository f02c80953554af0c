//! RGBA colors and the default flower palette

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional)
    pub fn parse_hex(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, ch) in channels.iter_mut().zip(hex.chars()) {
                    let v = ch.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = v * 17;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?).with_alpha(byte(6)?)),
            _ => Err(invalid()),
        }
    }

    /// CSS color string for `fillStyle`
    pub fn to_css(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Pastel flower colors
pub const DEFAULT_PALETTE: [Rgba; 6] = [
    Rgba::rgb(0xff, 0xb7, 0xc5), // sakura pink
    Rgba::rgb(0xff, 0xa8, 0xe2),
    Rgba::rgb(0xff, 0xf2, 0xb2),
    Rgba::rgb(0xb5, 0xe8, 0xff),
    Rgba::rgb(0xe4, 0xff, 0xe1),
    Rgba::rgb(0xff, 0xc7, 0xa6),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!(Rgba::parse_hex("#ffb7c5").unwrap(), Rgba::rgb(0xff, 0xb7, 0xc5));
        assert_eq!(Rgba::parse_hex("fff").unwrap(), Rgba::WHITE);
        assert_eq!(
            Rgba::parse_hex("#ffb7c5aa").unwrap(),
            Rgba::rgb(0xff, 0xb7, 0xc5).with_alpha(0xaa)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Rgba::parse_hex("#ff").is_err());
        assert!(Rgba::parse_hex("#gggggg").is_err());
        assert!(Rgba::parse_hex("pink").is_err());
        assert!(Rgba::parse_hex("#ééé").is_err());
    }

    #[test]
    fn test_css_output() {
        assert_eq!(Rgba::rgb(0xb5, 0xe8, 0xff).to_css(), "#b5e8ff");
        // Daisy fill: palette color with a baked alpha suffix
        assert_eq!(
            Rgba::rgb(0xff, 0xb7, 0xc5).with_alpha(0xaa).to_css(),
            "#ffb7c5aa"
        );
    }
}
