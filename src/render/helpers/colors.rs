//! Report theme: named colors and per-role text styles
//!
//! Changing the look of every report only requires editing [`DARK_THEME`].

use printpdf::{Color, Rgb};

use super::fonts::{FontStyle, TextStyle};
use crate::model::Status;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    pub fn to_color(self) -> Color {
        let scale = |v: u8| v as f32 / 255.0;
        Color::Rgb(Rgb::new(scale(self.0), scale(self.1), scale(self.2), None))
    }
}

/// Text style for each kind of text the engine draws
#[derive(Debug, Clone)]
pub struct ThemeFonts {
    pub header: TextStyle,
    pub footer: TextStyle,
    pub section: TextStyle,
    pub sub: TextStyle,
    pub body: TextStyle,
    pub bullet_marker: TextStyle,
    pub code: TextStyle,
    pub badge: TextStyle,
    pub check_glyph: TextStyle,
    pub checklist_label: TextStyle,
    pub toc_entry: TextStyle,
    pub cover_title: TextStyle,
    pub cover_subtitle: TextStyle,
    pub cover_meta: TextStyle,
    pub cover_note: TextStyle,
    pub card_title: TextStyle,
    pub card_body: TextStyle,
    pub file_heading: TextStyle,
    pub definition_term: TextStyle,
    pub definition_body: TextStyle,
}

/// Named colors plus fonts, read-only for the whole process
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_primary: Rgb8,
    pub bg_card: Rgb8,
    pub bg_code: Rgb8,
    pub text_primary: Rgb8,
    pub text_secondary: Rgb8,
    pub text_muted: Rgb8,
    pub accent: Rgb8,
    pub accent_dim: Rgb8,
    pub success: Rgb8,
    pub warning: Rgb8,
    pub danger: Rgb8,
    pub code_text: Rgb8,
    /// Table of contents separators
    pub rule: Rgb8,
    pub fonts: ThemeFonts,
}

impl Theme {
    pub fn status_color(&self, status: Status) -> Rgb8 {
        match status {
            Status::Complete => self.success,
            Status::InProgress => self.warning,
            Status::Planned => self.text_muted,
        }
    }

    pub fn check_color(&self, done: bool) -> Rgb8 {
        if done {
            self.success
        } else {
            self.danger
        }
    }
}

/// Dark glass-card theme used by every built-in report
pub static DARK_THEME: Theme = Theme {
    bg_primary: Rgb8(10, 10, 15),
    bg_card: Rgb8(22, 22, 42),
    bg_code: Rgb8(16, 16, 30),
    text_primary: Rgb8(232, 232, 240),
    text_secondary: Rgb8(160, 160, 184),
    text_muted: Rgb8(106, 106, 128),
    accent: Rgb8(121, 134, 203),
    accent_dim: Rgb8(80, 90, 150),
    success: Rgb8(102, 187, 106),
    warning: Rgb8(255, 183, 77),
    danger: Rgb8(239, 83, 80),
    code_text: Rgb8(180, 191, 255),
    rule: Rgb8(40, 40, 60),
    fonts: ThemeFonts {
        header: TextStyle::sans(FontStyle::Bold, 9.0),
        footer: TextStyle::sans(FontStyle::Italic, 7.5),
        section: TextStyle::sans(FontStyle::Bold, 14.0),
        sub: TextStyle::sans(FontStyle::Bold, 11.0),
        body: TextStyle::sans(FontStyle::Regular, 10.0),
        bullet_marker: TextStyle::sans(FontStyle::Regular, 10.0),
        code: TextStyle::mono(FontStyle::Regular, 8.5),
        badge: TextStyle::sans(FontStyle::Bold, 9.0),
        check_glyph: TextStyle::mono(FontStyle::Bold, 9.5),
        checklist_label: TextStyle::sans(FontStyle::Regular, 10.0),
        toc_entry: TextStyle::sans(FontStyle::Regular, 11.0),
        cover_title: TextStyle::sans(FontStyle::Bold, 30.0),
        cover_subtitle: TextStyle::sans(FontStyle::Regular, 12.0),
        cover_meta: TextStyle::sans(FontStyle::Regular, 10.0),
        cover_note: TextStyle::sans(FontStyle::Italic, 9.0),
        card_title: TextStyle::sans(FontStyle::Bold, 10.0),
        card_body: TextStyle::sans(FontStyle::Regular, 9.5),
        file_heading: TextStyle::mono(FontStyle::Bold, 9.0),
        definition_term: TextStyle::mono(FontStyle::Bold, 8.5),
        definition_body: TextStyle::sans(FontStyle::Regular, 9.0),
    },
};
