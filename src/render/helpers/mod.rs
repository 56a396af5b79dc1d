//! Helper utilities for PDF rendering

pub mod colors;
pub mod compress;
pub mod fonts;
pub mod layer;
pub mod text_metrics;
pub mod wrap;

pub use colors::{Rgb8, Theme, DARK_THEME};
pub use compress::finish_pdf;
pub use fonts::{FontFamily, FontStyle, TextStyle};
pub use layer::PageOps;
pub use text_metrics::{
    builtin_measurer, cell_baseline, BuiltinFontMeasurer, TextMeasure, PT_TO_MM,
};
pub use wrap::{wrap_preformatted, wrap_styled, wrap_text};
