pub mod args;

pub use args::{Args, PageSize, ReportKind};
