use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDateTime};

use crate::cli::Args;
use crate::error::ConfigError;

use super::defaults::*;

/// Accepted `--timestamp` format
const TIMESTAMP_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Runtime settings for report rendering
#[derive(Debug, Clone)]
pub struct Settings {
    // Page dimensions (mm, origin at the top-left corner)
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// First content line, below the header band
    pub content_top: f32,
    /// Content may not extend past `page_height - break_margin`
    pub break_margin: f32,
    /// Footer cell starts at `page_height - footer_offset`
    pub footer_offset: f32,

    /// Page allocation limit for one render
    pub max_pages: usize,
    /// Run lopdf stream compression on the finished PDF
    pub compress: bool,

    // Footer content
    pub marker: String,
    pub timestamp_format: String,
    pub generated_at: NaiveDateTime,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            margin_left: DEFAULT_SIDE_MARGIN,
            margin_right: DEFAULT_SIDE_MARGIN,
            content_top: DEFAULT_CONTENT_TOP,
            break_margin: DEFAULT_BREAK_MARGIN,
            footer_offset: DEFAULT_FOOTER_OFFSET,
            max_pages: DEFAULT_MAX_PAGES,
            compress: true,
            marker: DEFAULT_MARKER.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            generated_at: Local::now().naive_local(),
        }
    }
}

/// Derived page geometry shared by the engine, decorator and backends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub left: f32,
    pub right: f32,
    pub printable_top: f32,
    pub printable_bottom: f32,
}

impl PageGeometry {
    pub fn printable_width(&self) -> f32 {
        self.right - self.left
    }

    pub fn printable_height(&self) -> f32 {
        self.printable_bottom - self.printable_top
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let (page_width, page_height) = args.page_size.dimensions_mm();

        let mut settings = Self {
            page_width,
            page_height,
            compress: !args.no_compress,
            max_pages: args.max_pages,
            ..Default::default()
        };

        if let Some(ref marker) = args.marker {
            settings.marker = marker.clone();
        }
        if let Some(ref stamp) = args.timestamp {
            settings.generated_at = parse_timestamp(stamp)?;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Pin the generation timestamp (used for reproducible output)
    pub fn with_timestamp(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Check that the margins leave a usable printable area and the footer
    /// timestamp format parses
    pub fn validate(&self) -> Result<(), ConfigError> {
        let geometry = self.geometry();
        if geometry.printable_width() <= 0.0 {
            return Err(ConfigError::InvalidGeometry(format!(
                "side margins {} + {} leave no width on a {} mm page",
                self.margin_left, self.margin_right, self.page_width
            )));
        }
        if geometry.printable_height() <= 0.0 {
            return Err(ConfigError::InvalidGeometry(format!(
                "content top {} and break margin {} leave no height on a {} mm page",
                self.content_top, self.break_margin, self.page_height
            )));
        }
        if self.max_pages == 0 {
            return Err(ConfigError::InvalidGeometry(
                "max pages must be at least 1".to_string(),
            ));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidTimestamp(format!(
                "footer format {:?} has an unknown specifier",
                self.timestamp_format
            )));
        }
        Ok(())
    }

    pub fn geometry(&self) -> PageGeometry {
        PageGeometry {
            page_width: self.page_width,
            page_height: self.page_height,
            left: self.margin_left,
            right: self.page_width - self.margin_right,
            printable_top: self.content_top,
            printable_bottom: self.page_height - self.break_margin,
        }
    }

    /// Timestamp as printed in the footer
    pub fn timestamp_label(&self) -> String {
        self.generated_at.format(&self.timestamp_format).to_string()
    }
}

/// Parse a `YYYY-MM-DD HH:MM` timestamp
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, ConfigError> {
    NaiveDateTime::parse_from_str(input.trim(), TIMESTAMP_INPUT_FORMAT)
        .map_err(|e| ConfigError::InvalidTimestamp(format!("{}: {}", input, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_matches_a4_layout() {
        let geometry = Settings::default().geometry();
        assert_eq!(geometry.left, 10.0);
        assert_eq!(geometry.right, 200.0);
        assert_eq!(geometry.printable_top, 17.0);
        assert_eq!(geometry.printable_bottom, 277.0);
        assert!((geometry.printable_width() - 190.0).abs() < 1e-4);
        assert!((geometry.printable_height() - 260.0).abs() < 1e-4);
    }

    #[test]
    fn test_validate_rejects_collapsed_margins() {
        let settings = Settings {
            margin_left: 120.0,
            margin_right: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_timestamp_format() {
        let settings = Settings {
            timestamp_format: "%Q bad".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidTimestamp(_))
        ));

        let settings = Settings {
            timestamp_format: "%d.%m.%Y %H:%M".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parse_timestamp() {
        let stamp = parse_timestamp("2025-02-14 15:30").unwrap();
        let settings = Settings::default().with_timestamp(stamp);
        assert_eq!(settings.timestamp_label(), "February 14, 2025 03:30 PM");

        assert!(parse_timestamp("yesterday").is_err());
    }
}
