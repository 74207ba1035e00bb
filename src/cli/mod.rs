pub mod colormap;
pub mod style;
pub mod title;
pub mod verbosity;

use crate::plot::constants;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Report, Result};
use color_eyre::Help;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};
use verbosity::Verbosity;

/// Consistent plot styling: palettes, colormaps and settings.
#[derive(Debug, Parser)]
#[clap(name = "plotstyle", author, version)]
#[clap(about = "Consistent plot styling: palettes, colormaps and settings.")]
#[clap(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Set the output verbosity level.
    #[clap(short = 'v', long, global = true, default_value_t = Verbosity::default())]
    pub verbosity: Verbosity,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply the plot style and print the resulting settings.
    Style(style::Args),
    /// Print samples of the continuous colormap derived from a palette.
    Colormap(colormap::Args),
    /// Print text in title case.
    Title(title::Args),
}

/// Built-in discrete palettes.
#[derive(Clone, Copy, Debug, Default, EnumIter, PartialEq)]
pub enum Palette {
    #[default]
    OkabeIto,
    Kiwiish,
}

impl Palette {
    pub fn colors(&self) -> Vec<String> {
        let colors = match self {
            Palette::OkabeIto => constants::OKABE_ITO,
            Palette::Kiwiish => constants::KIWIISH,
        };
        colors.iter().map(|c| c.to_string()).collect_vec()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Palette::OkabeIto => "okabe-ito",
            Palette::Kiwiish => "kiwiish",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Palette {
    type Err = Report;

    fn from_str(name: &str) -> Result<Self, Report> {
        Palette::iter()
            .find(|p| p.to_string() == name)
            .ok_or_else(|| eyre!("Unknown palette: {name}"))
            .suggestion(format!(
                "Please choose from: {}",
                Palette::iter().map(|p| p.to_string()).join(", ")
            ))
    }
}

/// The palette colors picked on the command line: explicit colors win
/// over a named palette.
pub fn palette_colors(palette: &Palette, colors: &Option<Vec<String>>) -> Vec<String> {
    match colors {
        Some(colors) if !colors.is_empty() => colors.clone(),
        _ => palette.colors(),
    }
}
