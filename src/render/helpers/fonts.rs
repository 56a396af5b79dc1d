use printpdf::BuiltinFont;

use super::text_metrics::{builtin_measurer, BuiltinFontMeasurer, TextMeasure};

/// Font family for a text style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    SansSerif, // Helvetica
    Monospace, // Courier
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

/// Family, style and size (points) of a run of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: f32,
}

impl TextStyle {
    pub const fn new(family: FontFamily, style: FontStyle, size: f32) -> Self {
        Self {
            family,
            style,
            size,
        }
    }

    pub const fn sans(style: FontStyle, size: f32) -> Self {
        Self::new(FontFamily::SansSerif, style, size)
    }

    pub const fn mono(style: FontStyle, size: f32) -> Self {
        Self::new(FontFamily::Monospace, style, size)
    }

    /// The PDF Standard 14 font used to paint this style
    pub fn builtin(&self) -> BuiltinFont {
        match (self.family, self.style) {
            (FontFamily::SansSerif, FontStyle::Regular) => BuiltinFont::Helvetica,
            (FontFamily::SansSerif, FontStyle::Bold) => BuiltinFont::HelveticaBold,
            (FontFamily::SansSerif, FontStyle::Italic) => BuiltinFont::HelveticaOblique,
            (FontFamily::SansSerif, FontStyle::BoldItalic) => BuiltinFont::HelveticaBoldOblique,
            (FontFamily::Monospace, FontStyle::Regular) => BuiltinFont::Courier,
            (FontFamily::Monospace, FontStyle::Bold) => BuiltinFont::CourierBold,
            (FontFamily::Monospace, FontStyle::Italic) => BuiltinFont::CourierOblique,
            (FontFamily::Monospace, FontStyle::BoldItalic) => BuiltinFont::CourierBoldOblique,
        }
    }

    pub fn measurer(&self) -> &'static BuiltinFontMeasurer {
        builtin_measurer(self.builtin())
    }

    /// Width of `text` in mm when set in this style
    pub fn width_mm(&self, text: &str) -> f32 {
        self.measurer().measure_text(text, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_mapping() {
        assert_eq!(
            TextStyle::sans(FontStyle::Bold, 14.0).builtin(),
            BuiltinFont::HelveticaBold
        );
        assert_eq!(
            TextStyle::sans(FontStyle::Italic, 7.5).builtin(),
            BuiltinFont::HelveticaOblique
        );
        assert_eq!(
            TextStyle::mono(FontStyle::Regular, 8.5).builtin(),
            BuiltinFont::Courier
        );
    }

    #[test]
    fn test_width_scales_with_size() {
        let small = TextStyle::sans(FontStyle::Regular, 10.0);
        let large = TextStyle::sans(FontStyle::Regular, 20.0);
        let ratio = large.width_mm("Section") / small.width_mm("Section");
        assert!((ratio - 2.0).abs() < 1e-3);
    }
}
