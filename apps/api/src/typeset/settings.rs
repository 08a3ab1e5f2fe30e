//! Typographic and layout settings for one pagination run.
//!
//! `Settings` is a plain value: constructed with defaults, edited field by field by the
//! caller, and read-only to the engine. Numeric ranges are the caller's business; the
//! engine only degrades gracefully when they produce an unusable page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dimensions::paper::{paper_stock_or_default, PaperStock};
use crate::dimensions::trim::{ResolvedTrim, TrimFallback, TrimSelection};
use crate::dimensions::Unit;
use crate::typeset::fonts::{book_font_or_default, BookFont};

/// Where the folio (page number) sits on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageNumberPosition {
    #[default]
    BottomCenter,
    BottomOutside,
    TopOutside,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub trim: TrimSelection,
    pub unit: Unit,
    /// Margins in inches.
    pub margin_top: f64,
    pub margin_bottom: f64,
    /// Gutter: the margin nearest the binding.
    pub margin_inner: f64,
    pub margin_outer: f64,
    pub mirror_margins: bool,
    /// Index into `BOOK_FONTS`.
    pub font_index: usize,
    /// Body size in points.
    pub font_size: f64,
    /// Leading as a multiple of the font size.
    pub line_height: f64,
    /// First-line indent in inches. Any positive value enables indentation.
    pub first_line_indent: f64,
    /// Extra space between paragraphs, in points.
    pub paragraph_spacing: f64,
    pub chapter_start_on_recto: bool,
    pub drop_caps: bool,
    pub drop_cap_lines: u8,
    /// Chapter heading size in points.
    pub chapter_font_size: f64,
    pub show_running_header: bool,
    pub book_title: String,
    pub show_page_numbers: bool,
    pub page_number_position: PageNumberPosition,
    pub start_page_number: u32,
    /// Index into `PAPER_STOCKS`.
    pub paper_stock_index: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            trim: TrimSelection::default(),
            unit: Unit::Inches,
            margin_top: 0.75,
            margin_bottom: 0.7,
            margin_inner: 0.85,
            margin_outer: 0.65,
            mirror_margins: true,
            font_index: 0,
            font_size: 11.0,
            line_height: 1.5,
            first_line_indent: 0.25,
            paragraph_spacing: 0.0,
            chapter_start_on_recto: true,
            drop_caps: true,
            drop_cap_lines: 3,
            chapter_font_size: 22.0,
            show_running_header: true,
            book_title: "Untitled Book".to_string(),
            show_page_numbers: true,
            page_number_position: PageNumberPosition::BottomCenter,
            start_page_number: 1,
            paper_stock_index: 0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Configuration warnings
// ────────────────────────────────────────────────────────────────────────────

/// A setting the engine could not honour as given, and what it did instead.
///
/// These are configuration problems only. Content edge cases (empty manuscript,
/// oversized words) are never reported as warnings or errors.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ConfigWarning {
    #[error("unknown trim size '{requested}', using {fallback}")]
    UnknownTrimSize { requested: String, fallback: String },

    #[error("custom trim {width} × {height} is not printable, using {fallback}")]
    InvalidCustomTrim {
        width: f64,
        height: f64,
        fallback: String,
    },

    #[error("paper stock {requested} does not exist, using {fallback}")]
    UnknownPaperStock { requested: usize, fallback: String },

    #[error("font {requested} does not exist, using {fallback}")]
    UnknownFont { requested: usize, fallback: String },

    #[error("text area fits {computed} lines, laying out one line per page")]
    NoVerticalCapacity { computed: f64 },

    #[error("text area fits {computed} characters per line, wrapping one word per line")]
    NoHorizontalCapacity { computed: f64 },
}

impl ConfigWarning {
    /// Warning for a trim selection that resolved to `fallback_label` instead.
    pub fn from_trim_fallback(fallback: TrimFallback, fallback_label: &str) -> ConfigWarning {
        match fallback {
            TrimFallback::UnknownName(requested) => ConfigWarning::UnknownTrimSize {
                requested,
                fallback: fallback_label.to_string(),
            },
            TrimFallback::InvalidCustom { width, height } => ConfigWarning::InvalidCustomTrim {
                width,
                height,
                fallback: fallback_label.to_string(),
            },
        }
    }
}

/// Looks up a paper stock by index, falling back to the first stock with a warning.
pub fn resolve_paper_stock_index(index: usize) -> (&'static PaperStock, Option<ConfigWarning>) {
    let (stock, fell_back) = paper_stock_or_default(index);
    let warning = fell_back.then(|| ConfigWarning::UnknownPaperStock {
        requested: index,
        fallback: stock.name.to_string(),
    });
    (stock, warning)
}

impl Settings {
    /// Resolves the trim selection, reporting a fallback as a warning.
    pub fn resolve_trim(&self) -> (ResolvedTrim, Option<ConfigWarning>) {
        let (trim, fallback) = self.trim.resolve();
        let warning = fallback.map(|f| ConfigWarning::from_trim_fallback(f, &trim.label));
        (trim, warning)
    }

    pub fn resolve_paper_stock(&self) -> (&'static PaperStock, Option<ConfigWarning>) {
        resolve_paper_stock_index(self.paper_stock_index)
    }

    /// Resolves the body face. Out-of-range indices fall back to the first face.
    pub fn resolve_font(&self) -> (&'static BookFont, Option<ConfigWarning>) {
        let (font, fell_back) = book_font_or_default(self.font_index);
        let warning = fell_back.then(|| ConfigWarning::UnknownFont {
            requested: self.font_index,
            fallback: font.name.to_string(),
        });
        (font, warning)
    }
}
