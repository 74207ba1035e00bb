//! Consistent visual styling for charts.
//!
//! A [`style::StyleContext`] holds the settings every chart in a session
//! shares. [`style::apply_style`] fills it with the house style once, and
//! [`plot::set_title`] and [`plot::style_plot`] finish individual axes after
//! they are drawn.
//!
//! ```no_run
//! use plotstyle::plot::{set_title, style_plot, Axes, PlotOptions, TitleOptions};
//! use plotstyle::style::font::NoFonts;
//! use plotstyle::style::theme::BuiltinTheme;
//! use plotstyle::style::{apply_style, StyleContext, StyleOptions};
//!
//! let mut ctx = StyleContext::new();
//! apply_style(&mut ctx, &mut BuiltinTheme, &mut NoFonts, &StyleOptions::default())?;
//!
//! let mut ax = Axes::new();
//! ax.add_series("revenue", ctx.cycle_color(0).unwrap_or_default());
//! set_title(&ctx, &mut ax, "quarterly revenue", Some("in millions"), &TitleOptions::default());
//! style_plot(&ctx, &mut ax, &PlotOptions::default());
//! # Ok::<(), color_eyre::eyre::Report>(())
//! ```

pub mod cli;
pub mod plot;
pub mod style;
pub mod utils;

#[cfg(test)]
mod test;

use crate::plot::colormap::Colormap;
use crate::plot::text::title_case;
use crate::style::font::{FontProvider, GoogleFonts, NoFonts, SystemFonts};
use crate::style::theme::{BuiltinTheme, NoTheme, ThemeExtension};
use crate::style::{apply_style, resolve_colormap, Outcome, StyleContext, StyleOptions};
use color_eyre::eyre::{Report, Result};
use log::{info, warn};

/// Apply the style and print the resulting settings as JSON.
pub fn style(args: &cli::style::Args) -> Result<(), Report> {
    let options = StyleOptions {
        use_theme: !args.no_theme,
        palette: cli::palette_colors(&args.palette, &args.colors),
        install_font: !args.no_font,
        font_name: args.font_name.clone(),
        cmap: None,
    };

    let mut theme: Box<dyn ThemeExtension> = if args.no_theme {
        Box::new(NoTheme)
    } else {
        Box::new(BuiltinTheme::new())
    };
    let mut fonts: Box<dyn FontProvider> = match (args.no_font, args.system_fonts) {
        (true, _) => Box::new(NoFonts),
        (false, true) => Box::new(SystemFonts::new()),
        (false, false) => Box::new(GoogleFonts::new(&args.font_cache)),
    };

    let mut ctx = StyleContext::new();
    let applied = apply_style(&mut ctx, theme.as_mut(), fonts.as_mut(), &options)?;

    info!("Theme: {:?}", applied.theme);
    info!("Colormap {}: {:?}", applied.colormap.name(), applied.registration);
    match &applied.font {
        Outcome::Failed(reason) => warn!("Font {}: {reason}", options.font_name),
        outcome => info!("Font {}: {outcome:?}", options.font_name),
    }
    if let Some(base) = &applied.fonts.base {
        info!("Default font file: {:?}", base.path);
    }

    println!("{}", ctx.rc.to_json()?);

    Ok(())
}

/// Print the name and evenly spaced samples of a palette's colormap.
pub fn colormap(args: &cli::colormap::Args) -> Result<(), Report> {
    let colors = cli::palette_colors(&args.palette, &args.colors);
    let cmap: Colormap = resolve_colormap(&colors)?;

    info!("Colormap {} with {} entries", cmap.name(), cmap.n());
    println!("{}", cmap.name());
    for color in cmap.samples(args.samples) {
        println!("{color}");
    }

    Ok(())
}

/// Print the title-cased form of the given text.
pub fn title(args: &cli::title::Args) -> Result<(), Report> {
    println!("{}", title_case(&args.text.join(" ")));
    Ok(())
}
