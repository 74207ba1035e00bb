use clap::Parser;
use color_eyre::eyre::{Report, Result};
use plotstyle::cli::verbosity::Verbosity;
use plotstyle::cli::{Cli, Command};
use std::env;

fn setup(verbosity: &Verbosity) -> Result<(), Report> {
    color_eyre::install()?;

    // Set default logging level if RUST_LOG is not set.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", verbosity.to_string())
    }

    env_logger::init();

    Ok(())
}

fn main() -> Result<(), Report> {
    // Parse CLI parameters
    let args = Cli::parse();

    // Misc setup actions like logging
    setup(&args.verbosity)?;

    match args.command {
        Command::Style(args) => plotstyle::style(&args)?,
        Command::Colormap(args) => plotstyle::colormap(&args)?,
        Command::Title(args) => plotstyle::title(&args)?,
    }

    Ok(())
}
