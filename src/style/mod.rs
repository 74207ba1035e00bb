pub mod font;
pub mod registry;
pub mod theme;

use crate::plot::colormap::{Colormap, KIWIISH_CMAP, OKABE_ITO_CMAP};
use crate::plot::constants;
use crate::plot::rc::{RcParams, RcValue};
use color_eyre::eyre::{Report, Result};
use font::{FontProvider, PlotFonts};
use itertools::Itertools;
use log::{debug, warn};
use registry::{ColormapRegistry, Colormaps};
use serde::Serialize;
use std::fmt;
use theme::ThemeExtension;

/// Settings shared by every chart drawn in one session: the settings
/// registry, the colormap registry and the active colormap.
///
/// A context is not synchronized, callers sharing one across threads must
/// serialize access themselves.
pub struct StyleContext {
    pub rc: RcParams,
    pub colormaps: Box<dyn ColormapRegistry>,
    active_cmap: Option<Colormap>,
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StyleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleContext")
            .field("rc", &self.rc)
            .field("active_cmap", &self.active_cmap.as_ref().map(|c| c.name()))
            .finish()
    }
}

impl StyleContext {
    pub fn new() -> Self {
        StyleContext::with_registry(Box::new(Colormaps::new()))
    }

    pub fn with_registry(colormaps: Box<dyn ColormapRegistry>) -> Self {
        StyleContext {
            rc: RcParams::default(),
            colormaps,
            active_cmap: None,
        }
    }

    /// The colormap most recently installed by [`apply_style`].
    pub fn active_colormap(&self) -> Option<&Colormap> {
        self.active_cmap.as_ref()
    }

    pub fn set_active_colormap(&mut self, cmap: Colormap) {
        self.active_cmap = Some(cmap);
    }

    /// Color for the `i`-th plotted series, wrapping around the cycle.
    pub fn cycle_color(&self, i: usize) -> Option<String> {
        let cycle = self.rc.get_cycle("axes.prop_cycle")?;
        if cycle.is_empty() {
            None
        } else {
            Some(cycle[i % cycle.len()].clone())
        }
    }
}

/// Result of one best-effort step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Outcome {
    Applied,
    /// Applied through a fallback path.
    Fallback,
    Skipped(String),
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct StyleOptions {
    pub use_theme: bool,
    pub palette: Vec<String>,
    pub install_font: bool,
    pub font_name: String,
    pub cmap: Option<Colormap>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        StyleOptions {
            use_theme: true,
            palette: constants::OKABE_ITO.iter().map(|c| c.to_string()).collect_vec(),
            install_font: true,
            font_name: constants::DEFAULT_FONT_NAME.to_string(),
            cmap: None,
        }
    }
}

/// What [`apply_style`] did.
#[derive(Clone, Debug)]
pub struct AppliedStyle {
    pub fonts: PlotFonts,
    pub theme: Outcome,
    pub colormap: Colormap,
    pub registration: Outcome,
    pub font: Outcome,
}

/// The core settings, written over whatever a theme set before.
pub fn core_params() -> Vec<(&'static str, RcValue)> {
    vec![
        // Figure
        ("figure.figsize", RcValue::Pair(12.0, 8.0)),
        ("figure.dpi", RcValue::Int(110)),
        ("savefig.dpi", RcValue::Int(200)),
        ("figure.autolayout", false.into()),
        // Subplots spacing, top leaves room for title/subtitle/legend
        ("figure.subplot.hspace", RcValue::Float(0.4)),
        ("figure.subplot.wspace", RcValue::Float(0.3)),
        ("figure.subplot.top", RcValue::Float(0.80)),
        // Text
        ("text.color", constants::TEXT_COLOR.into()),
        ("font.family", "sans-serif".into()),
        ("font.size", RcValue::Float(11.0)),
        // Axes labels
        ("axes.labelsize", RcValue::Float(12.0)),
        ("axes.labelpad", RcValue::Float(5.0)),
        ("axes.labelcolor", constants::TEXT_COLOR.into()),
        // Title
        ("axes.titlelocation", "left".into()),
        ("axes.titlesize", RcValue::Float(14.0)),
        ("axes.titleweight", "bold".into()),
        ("axes.titlecolor", constants::TITLE_COLOR.into()),
        // Axes
        ("axes.edgecolor", "none".into()),
        ("axes.linewidth", RcValue::Float(0.0)),
        // Ticks
        ("xtick.color", constants::TEXT_COLOR.into()),
        ("ytick.color", constants::TEXT_COLOR.into()),
        ("xtick.labelsize", RcValue::Float(11.0)),
        ("ytick.labelsize", RcValue::Float(11.0)),
        ("xtick.direction", "out".into()),
        ("ytick.direction", "out".into()),
        ("xtick.major.size", RcValue::Float(0.0)),
        ("ytick.major.size", RcValue::Float(0.0)),
        ("xtick.minor.size", RcValue::Float(0.0)),
        ("ytick.minor.size", RcValue::Float(0.0)),
        // Grid, major only
        ("axes.grid", true.into()),
        ("axes.grid.which", "major".into()),
        ("axes.grid.axis", "both".into()),
        ("grid.color", constants::GRID_COLOR.into()),
        ("grid.alpha", RcValue::Float(0.3)),
        ("grid.linewidth", RcValue::Float(0.5)),
        ("grid.linestyle", ":".into()),
        // Spines
        ("axes.spines.left", false.into()),
        ("axes.spines.right", false.into()),
        ("axes.spines.top", false.into()),
        ("axes.spines.bottom", false.into()),
        // Legend
        ("legend.frameon", false.into()),
        ("legend.fontsize", RcValue::Float(12.0)),
        // Lines
        ("lines.linewidth", RcValue::Float(2.0)),
        ("lines.solid_capstyle", "round".into()),
        ("axes.formatter.useoffset", false.into()),
    ]
}

/// Pick the continuous colormap for a palette: the precomputed built-in
/// one when the palette equals a built-in palette, otherwise one derived
/// from the palette in its given order.
pub fn resolve_colormap(palette: &[String]) -> Result<Colormap, Report> {
    let colors = || palette.iter().map(String::as_str);
    if colors().eq(constants::KIWIISH) {
        Ok(KIWIISH_CMAP.clone())
    } else if colors().eq(constants::OKABE_ITO) {
        Ok(OKABE_ITO_CMAP.clone())
    } else {
        Colormap::from_list(
            constants::CUSTOM_CMAP_NAME,
            palette,
            constants::CMAP_RESOLUTION,
        )
    }
}

fn apply_theme(
    ctx: &mut StyleContext,
    theme: &mut dyn ThemeExtension,
    palette: &[String],
) -> Outcome {
    if !theme.is_available() {
        return Outcome::Skipped("theme extension is not available".to_string());
    }

    let result = theme
        .set_theme(&mut ctx.rc, constants::THEME_STYLE, constants::THEME_CONTEXT)
        .and_then(|_| theme.set_palette(&mut ctx.rc, palette));

    match result {
        Ok(()) => Outcome::Applied,
        Err(e) => {
            warn!("Theme extension failed, continuing without it: {e}");
            Outcome::Failed(e.to_string())
        }
    }
}

fn register_colormap(ctx: &mut StyleContext, cmap: &Colormap) -> Outcome {
    let error = match ctx.colormaps.register(cmap, true) {
        Ok(()) => return Outcome::Applied,
        Err(e) => e,
    };
    debug!("Colormap registration failed ({error}), trying legacy registration.");

    match ctx.colormaps.register_legacy(cmap.name(), cmap) {
        Ok(()) => Outcome::Fallback,
        Err(e) => {
            warn!("Unable to register colormap {:?}: {e}", cmap.name());
            Outcome::Failed(e.to_string())
        }
    }
}

fn install_fonts(
    ctx: &mut StyleContext,
    fonts: &mut dyn FontProvider,
    font_name: &str,
) -> (PlotFonts, Outcome) {
    if !fonts.is_available() {
        let outcome = Outcome::Skipped("font provider is not available".to_string());
        return (PlotFonts::default(), outcome);
    }

    let result = fonts
        .load_font(font_name, constants::REGULAR_WEIGHT)
        .and_then(|base| {
            let bold = fonts.load_font(font_name, constants::BOLD_WEIGHT)?;
            fonts.set_default_font(&mut ctx.rc, &base)?;
            Ok(PlotFonts {
                base: Some(base),
                bold: Some(bold),
            })
        });

    match result {
        Ok(plot_fonts) => (plot_fonts, Outcome::Applied),
        Err(e) => {
            warn!("Unable to install font {font_name:?}: {e}");
            (PlotFonts::default(), Outcome::Failed(e.to_string()))
        }
    }
}

/// Apply the plotting defaults to `ctx`. Call once per session, before
/// drawing.
///
/// Theme, colormap registration and font installation are best-effort and
/// reported through [`Outcome`]s. The only error is a palette that cannot
/// be turned into a colormap.
pub fn apply_style(
    ctx: &mut StyleContext,
    theme: &mut dyn ThemeExtension,
    fonts: &mut dyn FontProvider,
    options: &StyleOptions,
) -> Result<AppliedStyle, Report> {
    // theme first, so the core settings override it
    let theme_outcome = if options.use_theme {
        apply_theme(ctx, theme, &options.palette)
    } else {
        Outcome::Skipped("theme disabled".to_string())
    };
    debug!("Theme: {theme_outcome:?}");

    ctx.rc.update(core_params());

    // discrete cycle keeps the caller's order
    ctx.rc.set("axes.prop_cycle", options.palette.clone());

    let cmap = match &options.cmap {
        Some(cmap) => cmap.clone(),
        None => resolve_colormap(&options.palette)?,
    };
    debug!("Using continuous colormap: {}", cmap.name());

    let registration = register_colormap(ctx, &cmap);
    ctx.rc.set("image.cmap", cmap.name());
    ctx.set_active_colormap(cmap.clone());

    let (plot_fonts, font_outcome) = if options.install_font {
        install_fonts(ctx, fonts, &options.font_name)
    } else {
        let outcome = Outcome::Skipped("font installation disabled".to_string());
        (PlotFonts::default(), outcome)
    };
    debug!("Font: {font_outcome:?}");

    Ok(AppliedStyle {
        fonts: plot_fonts,
        theme: theme_outcome,
        colormap: cmap,
        registration,
        font: font_outcome,
    })
}
