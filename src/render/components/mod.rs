//! Block renderers: one height rule and one draw rule per content block

pub mod code;
pub mod contents;
pub mod cover;
pub mod headings;
pub mod rule;
pub mod status;
pub mod text;

pub use code::CodeBlockRenderer;
pub use contents::ContentsRenderer;
pub use cover::CoverRenderer;
pub use headings::HeadingRenderer;
pub use rule::DividerRenderer;
pub use status::StatusRenderer;
pub use text::TextRenderer;
