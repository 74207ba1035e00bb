use color_eyre::eyre::{eyre, Report, Result};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    /// Axes-relative x coordinate that text with this alignment anchors to.
    pub fn anchor_x(&self) -> f64 {
        match self {
            HorizontalAlignment::Left => 0.0,
            HorizontalAlignment::Center => 0.5,
            HorizontalAlignment::Right => 1.0,
        }
    }

    /// Alignment from a title location setting, anything unknown is centered.
    pub fn from_location(location: &str) -> Self {
        match location {
            "left" => HorizontalAlignment::Left,
            "right" => HorizontalAlignment::Right,
            _ => HorizontalAlignment::Center,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum FontWeight {
    Regular,
    Bold,
    Numeric(u16),
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Regular => write!(f, "regular"),
            FontWeight::Bold => write!(f, "bold"),
            FontWeight::Numeric(w) => write!(f, "{w}"),
        }
    }
}

impl FromStr for FontWeight {
    type Err = Report;

    fn from_str(weight: &str) -> Result<Self, Report> {
        let weight = match weight {
            "regular" | "normal" => FontWeight::Regular,
            "bold" => FontWeight::Bold,
            _ => FontWeight::Numeric(
                weight
                    .parse::<u16>()
                    .map_err(|_| eyre!("Unknown font weight: {weight}"))?,
            ),
        };
        Ok(weight)
    }
}

/// Collapse whitespace runs to single spaces and capitalize each word.
///
/// A cased letter is uppercased when the character before it is not a
/// cased letter, and lowercased otherwise. Digits and punctuation count
/// as word boundaries, so `"3rd"` becomes `"3Rd"` and `"o'neil"` becomes
/// `"O'Neil"`. Acronyms are not preserved: `"NASA"` becomes `"Nasa"`.
pub fn title_case(text: &str) -> String {
    let collapsed = text.split_whitespace().join(" ");

    let mut output = String::with_capacity(collapsed.len());
    let mut previous_cased = false;

    for c in collapsed.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && previous_cased {
            output.extend(c.to_lowercase());
        } else if cased {
            // only the first char of a multi-char mapping is capitalized, ex. ß -> Ss
            let mut upper = c.to_uppercase();
            output.extend(upper.next());
            output.extend(upper.flat_map(char::to_lowercase));
        } else {
            output.push(c);
        }
        previous_cased = cased;
    }

    output
}

/// Format a tick value as an integer with `,` digit grouping.
///
/// The fractional part is truncated toward zero.
pub fn thousands(value: f64) -> String {
    let integer = value.trunc() as i64;
    let digits = integer.unsigned_abs().to_string();

    let grouped = digits
        .chars()
        .rev()
        .chunks(3)
        .into_iter()
        .map(|chunk| chunk.collect::<String>())
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    if integer < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
