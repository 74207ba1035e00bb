pub mod annotate;
pub mod axes;
pub mod color;
pub mod colormap;
pub mod constants;
pub mod rc;
pub mod text;

pub use annotate::{set_title, style_plot, PlotOptions, ThousandsAxis, TitleOptions};
pub use axes::Axes;
pub use colormap::Colormap;
pub use rc::RcParams;
