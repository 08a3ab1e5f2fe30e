//! Page capacity estimation from settings and trim.
//!
//! The engine does not shape text. It estimates how many characters fit on a line from
//! a single calibrated average glyph width, and how many lines fit on a page from the
//! leading. This is an intentional approximation: renderers with real glyph metrics may
//! fit a few characters more or less per line, but page breaks stay stable and the engine
//! stays independent of any font rasteriser.

use serde::{Deserialize, Serialize};

use crate::dimensions::trim::ResolvedTrim;
use crate::dimensions::units::to_points;
use crate::typeset::settings::{ConfigWarning, Settings};

/// Average glyph advance of a proportional book serif, as a fraction of the font size.
pub const CALIBRATED_WIDTH_FACTOR: f64 = 0.42;
/// Vertical allowance for the running header, in points.
pub const RUNNING_HEADER_RESERVE_PT: f64 = 18.0;
/// Vertical allowance for the folio, in points.
pub const FOLIO_RESERVE_PT: f64 = 16.0;
/// Width of the first-line indent token, in characters.
pub const INDENT_CHARS: usize = 4;

/// Tunable constants of the estimate. `Default` is the calibrated set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub width_factor: f64,
    pub header_reserve_pt: f64,
    pub folio_reserve_pt: f64,
    pub indent_chars: usize,
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration {
            width_factor: CALIBRATED_WIDTH_FACTOR,
            header_reserve_pt: RUNNING_HEADER_RESERVE_PT,
            folio_reserve_pt: FOLIO_RESERVE_PT,
            indent_chars: INDENT_CHARS,
        }
    }
}

/// What one page can hold, as estimated for a run.
///
/// `lines_per_page` and `chars_per_line` are always at least 1; a configuration that
/// computes less is reported through `ConfigWarning` and laid out at the minimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageCapacity {
    pub text_area_height_pt: f64,
    pub text_area_width_pt: f64,
    pub line_height_pt: f64,
    pub lines_per_page: u32,
    pub chars_per_line: usize,
    pub indent_chars: usize,
    /// Line slots reserved by a chapter heading.
    pub heading_lines: u32,
    /// Line slots taken by the spacer between paragraphs (0 when spacing is off).
    pub spacer_lines: f64,
}

/// Estimates page capacity. Never fails; unusable results degrade to one line per page
/// or one word per line with a warning.
pub fn estimate_capacity(
    settings: &Settings,
    trim: &ResolvedTrim,
    calibration: &Calibration,
) -> (PageCapacity, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();

    let header_reserve = if settings.show_running_header {
        calibration.header_reserve_pt
    } else {
        0.0
    };
    let folio_reserve = if settings.show_page_numbers {
        calibration.folio_reserve_pt
    } else {
        0.0
    };

    let text_area_height_pt = to_points(trim.height - settings.margin_top - settings.margin_bottom)
        - header_reserve
        - folio_reserve;
    let line_height_pt = settings.font_size * settings.line_height;

    let raw_lines = (text_area_height_pt / line_height_pt).floor();
    let lines_per_page = if raw_lines.is_finite() && raw_lines >= 1.0 {
        raw_lines.min(u32::MAX as f64) as u32
    } else {
        warnings.push(ConfigWarning::NoVerticalCapacity {
            computed: raw_lines,
        });
        1
    };

    let text_area_width_pt = to_points(trim.width - settings.margin_inner - settings.margin_outer);
    let raw_chars = (text_area_width_pt / (settings.font_size * calibration.width_factor)).floor();
    let chars_per_line = if raw_chars.is_finite() && raw_chars >= 1.0 {
        raw_chars.min(usize::MAX as f64) as usize
    } else {
        warnings.push(ConfigWarning::NoHorizontalCapacity {
            computed: raw_chars,
        });
        1
    };

    // ceil(heading/body × 2 + 2): the heading line itself plus space above and below.
    let raw_heading = ((settings.chapter_font_size / settings.font_size) * 2.0 + 2.0).ceil();
    let heading_lines = if raw_heading.is_finite() && raw_heading >= 1.0 {
        raw_heading.min(u32::MAX as f64) as u32
    } else {
        lines_per_page
    };

    let spacer_lines = if settings.paragraph_spacing > 0.0 && line_height_pt > 0.0 {
        let lines = settings.paragraph_spacing / line_height_pt;
        if lines.is_finite() {
            lines
        } else {
            0.0
        }
    } else {
        0.0
    };

    let capacity = PageCapacity {
        text_area_height_pt,
        text_area_width_pt,
        line_height_pt,
        lines_per_page,
        chars_per_line,
        indent_chars: calibration.indent_chars,
        heading_lines,
        spacer_lines,
    };
    (capacity, warnings)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
