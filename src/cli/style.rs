use crate::cli::Palette;
use crate::plot::constants;
use clap::Parser;
use std::path::PathBuf;

/// Apply the plot style and print the resulting settings as JSON.
#[derive(Clone, Debug, Parser)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Built-in palette to install.
    #[clap(short = 'p', long, default_value_t = Args::default().palette)]
    pub palette: Palette,

    /// Comma-separated hex colors to use instead of a built-in palette.
    #[clap(short = 'c', long, value_delimiter = ',')]
    pub colors: Option<Vec<String>>,

    /// Do not apply the built-in theme before the core style.
    #[clap(long)]
    pub no_theme: bool,

    /// Do not install a font.
    #[clap(long)]
    pub no_font: bool,

    /// Font family to install.
    #[clap(short = 'f', long, default_value_t = Args::default().font_name)]
    pub font_name: String,

    /// Directory to download fonts to.
    #[clap(long, default_value_os_t = Args::default().font_cache)]
    pub font_cache: PathBuf,

    /// Look fonts up among installed system fonts instead of downloading.
    #[clap(long)]
    pub system_fonts: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            palette: Palette::default(),
            colors: None,
            no_theme: false,
            no_font: false,
            font_name: constants::DEFAULT_FONT_NAME.to_string(),
            font_cache: PathBuf::from(".cache/fonts"),
            system_fonts: false,
        }
    }
}
