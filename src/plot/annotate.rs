use crate::plot::axes::{Axes, Legend, Text, TextRole, TickFormatter};
use crate::plot::constants;
use crate::plot::text::{title_case, FontWeight, HorizontalAlignment, VerticalAlignment};
use crate::style::StyleContext;
use crate::utils::table::DistinctValues;
use color_eyre::eyre::{eyre, Report, Result};
use color_eyre::Help;
use log::debug;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct TitleOptions {
    /// Title height, as a fraction of the axes height.
    pub title_y: f64,
    /// Vertical distance from the title down to the subtitle.
    pub subtitle_gap: f64,
    pub subtitle_font_size: f64,
    pub subtitle_color: String,
    pub subtitle_weight: FontWeight,
    pub title_case: bool,
}

impl Default for TitleOptions {
    fn default() -> Self {
        TitleOptions {
            title_y: 1.12,
            subtitle_gap: 0.04,
            subtitle_font_size: 11.0,
            subtitle_color: constants::SUBTITLE_COLOR.to_string(),
            subtitle_weight: FontWeight::Regular,
            title_case: true,
        }
    }
}

/// Draw a title, and optional subtitle underneath it, above the axes.
///
/// The native title is cleared and titles from earlier calls are
/// replaced. Horizontal placement follows the `axes.titlelocation`
/// setting of `ctx`.
pub fn set_title(
    ctx: &StyleContext,
    ax: &mut Axes,
    title: &str,
    subtitle: Option<&str>,
    options: &TitleOptions,
) {
    let (title, subtitle) = if options.title_case {
        (title_case(title), subtitle.map(title_case))
    } else {
        (title.to_string(), subtitle.map(String::from))
    };

    ax.title = String::new();
    ax.texts
        .retain(|t| !matches!(t.role, TextRole::Title | TextRole::Subtitle));

    let location = ctx.rc.get_str("axes.titlelocation").unwrap_or("center");
    let alignment = HorizontalAlignment::from_location(location);
    let x = alignment.anchor_x();

    let font_weight = ctx
        .rc
        .get_str("axes.titleweight")
        .and_then(|w| w.parse::<FontWeight>().ok())
        .unwrap_or(FontWeight::Bold);

    ax.texts.push(Text {
        text: title,
        x,
        y: options.title_y,
        horizontal_alignment: alignment,
        vertical_alignment: VerticalAlignment::Bottom,
        font_size: ctx.rc.get_f64("axes.titlesize").unwrap_or(14.0),
        font_weight,
        color: ctx
            .rc
            .get_str("axes.titlecolor")
            .unwrap_or(constants::TITLE_COLOR)
            .to_string(),
        clip_on: false,
        role: TextRole::Title,
    });

    if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
        ax.texts.push(Text {
            text: subtitle,
            x,
            y: options.title_y - options.subtitle_gap,
            horizontal_alignment: alignment,
            vertical_alignment: VerticalAlignment::Bottom,
            font_size: options.subtitle_font_size,
            font_weight: options.subtitle_weight,
            color: options.subtitle_color.clone(),
            clip_on: false,
            role: TextRole::Subtitle,
        });
    }
}

/// Which axes get thousands-separated tick labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThousandsAxis {
    X,
    Y,
    Both,
}

impl ThousandsAxis {
    pub fn x(&self) -> bool {
        matches!(self, ThousandsAxis::X | ThousandsAxis::Both)
    }

    pub fn y(&self) -> bool {
        matches!(self, ThousandsAxis::Y | ThousandsAxis::Both)
    }
}

impl fmt::Display for ThousandsAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self {
            ThousandsAxis::X => "x",
            ThousandsAxis::Y => "y",
            ThousandsAxis::Both => "both",
        };
        write!(f, "{axis}")
    }
}

impl FromStr for ThousandsAxis {
    type Err = Report;

    fn from_str(axis: &str) -> Result<Self, Report> {
        let axis = match axis {
            "x" => ThousandsAxis::X,
            "y" => ThousandsAxis::Y,
            "both" => ThousandsAxis::Both,
            _ => Err(eyre!("Unknown axis: {axis}")).suggestion("Please choose from: x, y, both")?,
        };
        Ok(axis)
    }
}

pub struct PlotOptions<'a> {
    /// Dataset whose `legend_column` sizes the legend.
    pub dataset: Option<&'a dyn DistinctValues>,
    pub legend_column: Option<String>,
    pub format_thousands: Option<ThousandsAxis>,
    pub x_rotation: f64,
    pub y_rotation: f64,
    pub legend: bool,
    pub legend_y: f64,
    pub legend_max_cols: usize,
    pub apply_cmap: bool,
}

impl Default for PlotOptions<'_> {
    fn default() -> Self {
        PlotOptions {
            dataset: None,
            legend_column: None,
            format_thousands: None,
            x_rotation: 30.0,
            y_rotation: 10.0,
            legend: true,
            legend_y: 1.01,
            legend_max_cols: 6,
            apply_cmap: true,
        }
    }
}

/// Number of legend columns, between 1 and `max_cols`.
pub fn legend_columns(
    dataset: Option<&dyn DistinctValues>,
    column: Option<&str>,
    n_labels: usize,
    max_cols: usize,
) -> usize {
    let n_items = match (dataset, column) {
        (Some(dataset), Some(column)) => match dataset.n_unique(column) {
            Ok(n) => n,
            Err(e) => {
                debug!("Sizing legend from its labels, column lookup failed: {e}");
                n_labels
            }
        },
        _ => n_labels,
    };
    n_items.min(max_cols).max(1)
}

/// Post-plot styling of one axes: tick rotation, thousands separators, a
/// horizontal legend band above the axes, title-cased axis labels and
/// recoloring with the active colormap.
pub fn style_plot(ctx: &StyleContext, ax: &mut Axes, options: &PlotOptions) {
    ax.xaxis.tick_rotation = options.x_rotation;
    ax.yaxis.tick_rotation = options.y_rotation;

    if let Some(axis) = options.format_thousands {
        if axis.y() {
            ax.yaxis.formatter = TickFormatter::Thousands;
        }
        if axis.x() {
            ax.xaxis.formatter = TickFormatter::Thousands;
        }
    }

    if options.legend {
        let handles = ax.legend_handles();
        if !handles.is_empty() {
            let ncol = legend_columns(
                options.dataset,
                options.legend_column.as_deref(),
                handles.len(),
                options.legend_max_cols,
            );
            debug!("Legend with {} entries in {ncol} columns", handles.len());

            ax.legend = Some(Legend {
                entries: handles,
                location: "lower left".to_string(),
                anchor: (0.0, options.legend_y),
                ncol,
                frame_on: false,
                border_axes_pad: constants::LEGEND_BORDER_AXES_PAD,
                column_spacing: constants::LEGEND_COLUMN_SPACING,
                handle_text_pad: constants::LEGEND_HANDLE_TEXT_PAD,
                handle_length: constants::LEGEND_HANDLE_LENGTH,
                label_spacing: constants::LEGEND_LABEL_SPACING,
            });
        }
    }

    if !ax.xaxis.label.is_empty() {
        ax.xaxis.label = title_case(&ax.xaxis.label);
    }
    if !ax.yaxis.label.is_empty() {
        ax.yaxis.label = title_case(&ax.yaxis.label);
    }

    if options.apply_cmap {
        if let Some(cmap) = ctx.active_colormap() {
            let mut recolored = 0;
            for artist in ax.images.iter_mut().chain(ax.collections.iter_mut()) {
                if artist.set_cmap(cmap) {
                    recolored += 1;
                }
            }
            debug!("Applied colormap {} to {recolored} artists", cmap.name());
        }
    }
}
