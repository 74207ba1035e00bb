use color_eyre::eyre::{eyre, Report, Result};
use color_eyre::Help;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An RGBA color with channels in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Result<Self, Report> {
        let digits = hex.trim().strip_prefix('#').ok_or_else(|| {
            eyre!("Invalid hex color: {hex:?}")
                .suggestion("Hex colors must start with '#', for example: #0072B2")
        })?;

        if !digits.is_ascii() {
            return Err(eyre!("Invalid hex color: {hex:?}"));
        }

        // expand shorthand #RGB and #RGBA
        let digits = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 | 8 => digits.to_string(),
            _ => {
                return Err(eyre!("Invalid hex color length: {hex:?}")
                    .suggestion("Use #RGB, #RGBA, #RRGGBB or #RRGGBBAA."))
            }
        };

        let channel = |i: usize| -> Result<f64, Report> {
            let value = u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| eyre!("Invalid hex color {hex:?}: {e}"))?;
            Ok(value as f64 / 255.)
        };

        let a = if digits.len() == 8 { channel(6)? } else { 1.0 };

        Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Linear interpolation between two colors, `t` in [0, 1].
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Channels as 8-bit integers.
    pub fn to_u8(&self) -> [u8; 4] {
        let scale = |v: f64| (v.clamp(0., 1.) * 255.).round() as u8;
        [scale(self.r), scale(self.g), scale(self.b), scale(self.a)]
    }

    /// Uppercase `#RRGGBB`, with an alpha channel only when not opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_u8();
        match a {
            255 => format!("#{r:02X}{g:02X}{b:02X}"),
            _ => format!("#{r:02X}{g:02X}{b:02X}{a:02X}"),
        }
    }
}

impl FromStr for Rgba {
    type Err = Report;

    fn from_str(hex: &str) -> Result<Self, Report> {
        Rgba::from_hex(hex)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
