use crate::cli::Palette;
use clap::Parser;

/// Print the continuous colormap derived from a palette.
///
/// Built-in palettes use their precomputed colormap, built from the
/// palette sorted by hex value. Custom colors are interpolated in the
/// order given.
#[derive(Clone, Debug, Parser)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Built-in palette.
    #[clap(short = 'p', long, default_value_t = Args::default().palette)]
    pub palette: Palette,

    /// Comma-separated hex colors to use instead of a built-in palette.
    #[clap(short = 'c', long, value_delimiter = ',')]
    pub colors: Option<Vec<String>>,

    /// Number of evenly spaced samples to print.
    #[clap(short = 'k', long, default_value_t = Args::default().samples)]
    pub samples: usize,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            palette: Palette::default(),
            colors: None,
            samples: 11,
        }
    }
}
