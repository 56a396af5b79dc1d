//! Width metrics for the PDF Standard 14 fonts the theme uses
//!
//! Page breaks are decided from these numbers, so they must match what a
//! viewer lays out for Helvetica and Courier.

use printpdf::BuiltinFont;

/// 1 point = 0.3528 mm
pub const PT_TO_MM: f32 = 0.3528;

/// Width for characters outside the tables
const FALLBACK_WIDTH: u16 = 500;
const COURIER_WIDTH: u16 = 600;

pub trait TextMeasure {
    /// Width of `text` in mm at `font_size` points
    fn measure_text(&self, text: &str, font_size: f32) -> f32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Widths {
    Helvetica,
    HelveticaBold,
    Monospace,
}

/// AFM-backed measurer for one builtin face
#[derive(Debug)]
pub struct BuiltinFontMeasurer {
    widths: Widths,
}

static HELVETICA: BuiltinFontMeasurer = BuiltinFontMeasurer {
    widths: Widths::Helvetica,
};
static HELVETICA_BOLD: BuiltinFontMeasurer = BuiltinFontMeasurer {
    widths: Widths::HelveticaBold,
};
static COURIER: BuiltinFontMeasurer = BuiltinFontMeasurer {
    widths: Widths::Monospace,
};

impl BuiltinFontMeasurer {
    fn advance(&self, c: char) -> u16 {
        let table = match self.widths {
            Widths::Monospace => return COURIER_WIDTH,
            Widths::Helvetica => &HELVETICA_WIDTHS,
            Widths::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        u8::try_from(c)
            .ok()
            .and_then(|code| table.get(code as usize).copied())
            .unwrap_or(FALLBACK_WIDTH)
    }

    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.advance(c))).sum();
        units as f32 / 1000.0 * font_size
    }

    pub fn measure_width_mm(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_pt(text, font_size) * PT_TO_MM
    }
}

impl TextMeasure for BuiltinFontMeasurer {
    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_mm(text, font_size)
    }
}

/// Measurer for a builtin face. Oblique faces share the upright widths;
/// faces the theme never uses fall back to Helvetica.
pub fn builtin_measurer(font: BuiltinFont) -> &'static BuiltinFontMeasurer {
    match font {
        BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => &HELVETICA_BOLD,
        BuiltinFont::Courier
        | BuiltinFont::CourierBold
        | BuiltinFont::CourierOblique
        | BuiltinFont::CourierBoldOblique => &COURIER,
        _ => &HELVETICA,
    }
}

/// Baseline of text vertically centered in a cell whose top edge is `top`
pub fn cell_baseline(top: f32, cell_height: f32, font_size: f32) -> f32 {
    top + 0.5 * cell_height + 0.3 * font_size * PT_TO_MM
}

// Adobe AFM widths, ASCII subset, 1000 units per em.

/// Helvetica character widths
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 32-47: space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 48-63: 0 1 2 3 4 5 6 7 8 9 : ; < = > ?
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // 64-79: @ A B C D E F G H I J K L M N O
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // 80-95: P Q R S T U V W X Y Z [ \ ] ^ _
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // 96-111: ` a b c d e f g h i j k l m n o
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // 112-127: p q r s t u v w x y z { | } ~ DEL
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];

/// Helvetica-Bold character widths
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_scales_with_size_and_length() {
        let helvetica = builtin_measurer(BuiltinFont::Helvetica);
        let width = helvetica.measure_width_mm("Report", 10.0);

        assert!(width > 0.0);
        assert!(helvetica.measure_width_mm("Report Flow", 10.0) > width);
        assert!((helvetica.measure_width_mm("Report", 20.0) - 2.0 * width).abs() < 1e-3);
    }

    #[test]
    fn test_courier_is_monospace() {
        let courier = builtin_measurer(BuiltinFont::CourierBold);
        let narrow = courier.measure_width_mm("iiii", 8.5);
        let wide = courier.measure_width_mm("WWWW", 8.5);
        assert!((narrow - wide).abs() < 1e-4);
        assert!((narrow - 4.0 * 0.6 * 8.5 * PT_TO_MM).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let regular = builtin_measurer(BuiltinFont::HelveticaOblique);
        let bold = builtin_measurer(BuiltinFont::HelveticaBold);
        assert!(
            bold.measure_text("Build Breakdown", 10.0)
                > regular.measure_text("Build Breakdown", 10.0)
        );
    }

    #[test]
    fn test_non_ascii_uses_fallback_width() {
        let helvetica = builtin_measurer(BuiltinFont::Helvetica);
        let expected = f32::from(FALLBACK_WIDTH) / 1000.0 * 10.0;
        assert!((helvetica.measure_width_pt("\u{2713}", 10.0) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_cell_baseline_sits_inside_cell() {
        let baseline = cell_baseline(100.0, 10.0, 14.0);
        assert!(baseline > 105.0 && baseline < 110.0);
    }
}
