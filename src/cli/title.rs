use clap::Parser;

/// Print text in title case, with whitespace collapsed.
#[derive(Clone, Debug, Parser)]
pub struct Args {
    /// Text to convert.
    #[clap(required = true, num_args = 1..)]
    pub text: Vec<String>,
}
