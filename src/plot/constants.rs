// Okabe-Ito palette, picked for readability under color vision deficiency
pub const OKABE_ITO: [&str; 7] = [
    "#0072B2", // blue
    "#E69F00", // orange
    "#009E73", // green/teal
    "#CC79A7", // purple
    "#56B4E9", // sky
    "#F0E442", // yellow
    "#D55E00", // vermillion
];

// Brighter variant with a kiwi green accent, still plot-safe
pub const KIWIISH: [&str; 7] = [
    "#7CFF6B", // kiwi green (accent)
    "#00B3A4", // teal
    "#F0E442", // yellow
    "#B45CFF", // purple
    "#56B4E9", // sky
    "#FF8A00", // warm orange
    "#0072B2", // blue
];

pub const OKABE_ITO_CMAP_NAME: &str = "okabe_ito_cont";
pub const KIWIISH_CMAP_NAME: &str = "kiwiish_cont";
pub const CUSTOM_CMAP_NAME: &str = "custom_cont";

// number of lookup table entries in a continuous colormap
pub const CMAP_RESOLUTION: usize = 256;

pub const TEXT_COLOR: &str = "#333333";
pub const TITLE_COLOR: &str = "#000000";
pub const SUBTITLE_COLOR: &str = "#8A8A8A";
pub const GRID_COLOR: &str = "#999999";

pub const DEFAULT_FONT_NAME: &str = "Funnel Sans";
pub const REGULAR_WEIGHT: u16 = 400;
pub const BOLD_WEIGHT: u16 = 800;

pub const THEME_STYLE: &str = "white";
pub const THEME_CONTEXT: &str = "notebook";

// Legend band spacing, in font-size units
pub const LEGEND_BORDER_AXES_PAD: f64 = 0.0;
pub const LEGEND_COLUMN_SPACING: f64 = 1.0;
pub const LEGEND_HANDLE_TEXT_PAD: f64 = 0.6;
pub const LEGEND_HANDLE_LENGTH: f64 = 1.6;
pub const LEGEND_LABEL_SPACING: f64 = 0.6;
