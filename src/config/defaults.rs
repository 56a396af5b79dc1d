/// A4 page width in mm
pub const DEFAULT_PAGE_WIDTH: f32 = 210.0;

/// A4 page height in mm
pub const DEFAULT_PAGE_HEIGHT: f32 = 297.0;

/// Left and right page margin in mm
pub const DEFAULT_SIDE_MARGIN: f32 = 10.0;

/// Y position of the first content line, just below the header band
pub const DEFAULT_CONTENT_TOP: f32 = 17.0;

/// Distance from the page bottom at which content triggers a page break
pub const DEFAULT_BREAK_MARGIN: f32 = 20.0;

/// Distance from the page bottom to the top of the footer cell
pub const DEFAULT_FOOTER_OFFSET: f32 = 15.0;

/// Horizontal padding inside every text cell in mm
pub const CELL_PADDING: f32 = 1.0;

/// Upper bound on allocated pages for a single render
pub const DEFAULT_MAX_PAGES: usize = 500;

/// Footer confidentiality marker
pub const DEFAULT_MARKER: &str = "CONFIDENTIAL";

/// strftime pattern for the footer generation timestamp
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%B %d, %Y %I:%M %p";

/// Section heading: gap above, row height, gap below the underline
pub const SECTION_GAP_BEFORE: f32 = 4.0;
pub const SECTION_ROW_HEIGHT: f32 = 10.0;
pub const SECTION_GAP_AFTER: f32 = 4.0;

/// Section underline length as a fraction of the page width
pub const SECTION_RULE_RATIO: f32 = 0.357;

/// Sub-heading: gap above, row height, gap below
pub const SUB_GAP_BEFORE: f32 = 2.0;
pub const SUB_ROW_HEIGHT: f32 = 8.0;
pub const SUB_GAP_AFTER: f32 = 1.0;

/// Body text line height and trailing gap
pub const BODY_LINE_HEIGHT: f32 = 5.5;
pub const BODY_GAP_AFTER: f32 = 2.0;

/// Bullet indent, marker cell width and trailing gap
pub const BULLET_INDENT: f32 = 15.0;
pub const BULLET_MARKER_WIDTH: f32 = 6.0;
pub const BULLET_GAP_AFTER: f32 = 1.0;

/// Code block line height, horizontal inset and trailing gap
pub const CODE_LINE_HEIGHT: f32 = 4.5;
pub const CODE_INSET: f32 = 5.0;
pub const CODE_GAP_AFTER: f32 = 3.0;

/// Status badge row height and trailing gap
pub const BADGE_ROW_HEIGHT: f32 = 6.0;
pub const BADGE_GAP_AFTER: f32 = 1.0;

/// Checklist row height and check glyph cell width
pub const CHECK_ROW_HEIGHT: f32 = 6.0;
pub const CHECK_GLYPH_WIDTH: f32 = 10.0;

/// Divider gap above and below the rule
pub const DIVIDER_GAP: f32 = 3.0;

/// Table of contents row height
pub const TOC_ROW_HEIGHT: f32 = 9.0;

/// File heading row height
pub const FILE_ROW_HEIGHT: f32 = 7.0;

/// Definition term row, description line height and trailing gap
pub const DEFINITION_ROW_HEIGHT: f32 = 5.0;
pub const DEFINITION_LINE_HEIGHT: f32 = 5.0;
pub const DEFINITION_INDENT: f32 = 4.0;
pub const DEFINITION_GAP_AFTER: f32 = 1.0;
