use crate::plot::colormap::Colormap;
use crate::plot::constants;
use crate::plot::text::{self, FontWeight, HorizontalAlignment, VerticalAlignment};
use itertools::Itertools;
use serde::Serialize;

/// What drew a text artifact, so annotators can replace their own text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum TextRole {
    Title,
    Subtitle,
    Annotation,
}

/// A text artifact positioned in axes-relative coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Text {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub color: String,
    pub clip_on: bool,
    pub role: TextRole,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum TickFormatter {
    #[default]
    Scalar,
    Thousands,
}

impl TickFormatter {
    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormatter::Scalar => format!("{value}"),
            TickFormatter::Thousands => text::thousands(value),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub tick_rotation: f64,
    pub formatter: TickFormatter,
}

/// A plotted series, the source of legend handles.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub entries: Vec<Series>,
    pub location: String,
    pub anchor: (f64, f64),
    pub ncol: usize,
    pub frame_on: bool,
    pub border_axes_pad: f64,
    pub column_spacing: f64,
    pub handle_text_pad: f64,
    pub handle_length: f64,
    pub label_spacing: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum ArtistKind {
    Image,
    Scatter,
    Mesh,
    Patches,
}

/// A rendered raster image or collection. Only mappable artists accept a
/// colormap.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Artist {
    pub kind: ArtistKind,
    pub mappable: bool,
    pub cmap: Option<String>,
}

impl Artist {
    pub fn new(kind: ArtistKind, mappable: bool) -> Self {
        Artist {
            kind,
            mappable,
            cmap: None,
        }
    }

    /// Assign a colormap, returning whether the artist accepted it.
    pub fn set_cmap(&mut self, cmap: &Colormap) -> bool {
        if self.mappable {
            self.cmap = Some(cmap.name().to_string());
        }
        self.mappable
    }
}

/// A single chart surface, owned by calling code and mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Axes {
    pub title: String,
    pub texts: Vec<Text>,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub series: Vec<Series>,
    pub legend: Option<Legend>,
    pub images: Vec<Artist>,
    pub collections: Vec<Artist>,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_series<L: Into<String>, C: Into<String>>(&mut self, label: L, color: C) {
        self.series.push(Series {
            label: label.into(),
            color: color.into(),
        });
    }

    pub fn add_image(&mut self) {
        self.images.push(Artist::new(ArtistKind::Image, true));
    }

    pub fn add_collection(&mut self, kind: ArtistKind, mappable: bool) {
        self.collections.push(Artist::new(kind, mappable));
    }

    /// Place free text at axes-relative `(x, y)`.
    pub fn text<S: Into<String>>(&mut self, x: f64, y: f64, text: S) {
        self.texts.push(Text {
            text: text.into(),
            x,
            y,
            horizontal_alignment: HorizontalAlignment::Left,
            vertical_alignment: VerticalAlignment::Bottom,
            font_size: 11.0,
            font_weight: FontWeight::Regular,
            color: constants::TEXT_COLOR.to_string(),
            clip_on: true,
            role: TextRole::Annotation,
        });
    }

    pub fn set_xlabel<S: Into<String>>(&mut self, label: S) {
        self.xaxis.label = label.into();
    }

    pub fn set_ylabel<S: Into<String>>(&mut self, label: S) {
        self.yaxis.label = label.into();
    }

    /// Series that appear in a legend: labelled, and not hidden with a
    /// leading underscore.
    pub fn legend_handles(&self) -> Vec<Series> {
        self.series
            .iter()
            .filter(|s| !s.label.is_empty() && !s.label.starts_with('_'))
            .cloned()
            .collect_vec()
    }

    pub fn texts_with_role(&self, role: TextRole) -> Vec<&Text> {
        self.texts.iter().filter(|t| t.role == role).collect_vec()
    }
}
