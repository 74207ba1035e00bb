use crate::plot::rc::{RcParams, RcValue};
use color_eyre::eyre::{eyre, Report, Result};
use color_eyre::Help;
use log::debug;

/// Optional higher-level theming layer applied before the core style.
pub trait ThemeExtension {
    /// Whether the extension can be used at all. Unavailable extensions are
    /// skipped without being called.
    fn is_available(&self) -> bool {
        true
    }

    fn set_theme(&mut self, rc: &mut RcParams, style: &str, context: &str) -> Result<(), Report>;

    fn set_palette(&mut self, rc: &mut RcParams, palette: &[String]) -> Result<(), Report>;
}

/// Stand-in for an absent theming layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTheme;

impl ThemeExtension for NoTheme {
    fn is_available(&self) -> bool {
        false
    }

    fn set_theme(&mut self, _rc: &mut RcParams, _style: &str, _context: &str) -> Result<(), Report> {
        Err(eyre!("No theme extension is available."))
    }

    fn set_palette(&mut self, _rc: &mut RcParams, _palette: &[String]) -> Result<(), Report> {
        Err(eyre!("No theme extension is available."))
    }
}

pub const STYLES: [&str; 5] = ["white", "whitegrid", "dark", "darkgrid", "ticks"];
pub const CONTEXTS: [&str; 4] = ["paper", "notebook", "talk", "poster"];

/// Axes styles and plotting contexts, written straight into the settings
/// registry.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinTheme;

impl BuiltinTheme {
    pub fn new() -> Self {
        BuiltinTheme
    }

    fn style_params(style: &str) -> Result<Vec<(&'static str, RcValue)>, Report> {
        let (face, edge, grid) = match style {
            "white" | "ticks" => ("white", ".15", false),
            "whitegrid" => ("white", ".8", true),
            "dark" => ("#EAEAF2", "white", false),
            "darkgrid" => ("#EAEAF2", "white", true),
            _ => {
                return Err(eyre!("Unknown theme style: {style}")
                    .suggestion(format!("Please choose from: {}", STYLES.join(", "))))
            }
        };
        let tick_size = if style == "ticks" { 6.0 } else { 0.0 };
        let grid_color = if face == "white" { ".8" } else { "white" };

        Ok(vec![
            ("figure.facecolor", face.into()),
            ("axes.facecolor", face.into()),
            ("axes.edgecolor", edge.into()),
            ("axes.grid", grid.into()),
            ("axes.axisbelow", true.into()),
            ("grid.color", grid_color.into()),
            ("grid.linestyle", "-".into()),
            ("text.color", ".15".into()),
            ("axes.labelcolor", ".15".into()),
            ("xtick.color", ".15".into()),
            ("ytick.color", ".15".into()),
            ("xtick.direction", "out".into()),
            ("ytick.direction", "out".into()),
            ("xtick.major.size", RcValue::Float(tick_size)),
            ("ytick.major.size", RcValue::Float(tick_size)),
            ("lines.solid_capstyle", "round".into()),
            ("axes.spines.top", true.into()),
            ("axes.spines.right", true.into()),
        ])
    }

    fn context_params(context: &str) -> Result<Vec<(&'static str, RcValue)>, Report> {
        let scale = match context {
            "paper" => 0.8,
            "notebook" => 1.0,
            "talk" => 1.5,
            "poster" => 2.0,
            _ => {
                return Err(eyre!("Unknown theme context: {context}")
                    .suggestion(format!("Please choose from: {}", CONTEXTS.join(", "))))
            }
        };

        let sized = |base: f64| RcValue::Float(base * scale);
        Ok(vec![
            ("font.size", sized(12.0)),
            ("axes.labelsize", sized(12.0)),
            ("axes.titlesize", sized(12.0)),
            ("xtick.labelsize", sized(11.0)),
            ("ytick.labelsize", sized(11.0)),
            ("legend.fontsize", sized(11.0)),
            ("axes.linewidth", sized(1.25)),
            ("grid.linewidth", sized(1.0)),
            ("lines.linewidth", sized(1.5)),
            ("lines.markersize", sized(6.0)),
        ])
    }
}

impl ThemeExtension for BuiltinTheme {
    fn set_theme(&mut self, rc: &mut RcParams, style: &str, context: &str) -> Result<(), Report> {
        // validate both before writing anything
        let style_params = BuiltinTheme::style_params(style)?;
        let context_params = BuiltinTheme::context_params(context)?;

        debug!("Applying theme style {style:?} with context {context:?}");
        rc.update(style_params);
        rc.update(context_params);

        Ok(())
    }

    fn set_palette(&mut self, rc: &mut RcParams, palette: &[String]) -> Result<(), Report> {
        if palette.is_empty() {
            return Err(eyre!("Cannot set an empty palette."));
        }
        rc.set("axes.prop_cycle", palette.to_vec());
        Ok(())
    }
}
