//! Spine width and full cover-wrap geometry.
//!
//! # Page counting
//! A page count is always a count of printed page faces, the same unit a stock's `ppi`
//! is quoted in. A pagination result maps to that count through `printed_page_count`,
//! which rounds up to an even number because every leaf carries two faces. The live
//! typesetting estimate, the cover calculator and the bookshelf estimate all go through
//! the same path.

use serde::{Deserialize, Serialize};

use crate::dimensions::paper::PaperStock;
use crate::dimensions::units::to_millimeters;

pub const DEFAULT_BLEED_IN: f64 = 0.125;
pub const DEFAULT_SAFE_ZONE_IN: f64 = 0.125;

/// Spine thickness for `page_count` printed faces on `stock`.
///
/// Does not validate: zero or negative counts give a zero or negative spine.
pub fn spine_width(page_count: f64, stock: &PaperStock) -> f64 {
    page_count / stock.ppi
}

/// Printed page faces for a laid-out book of `pages` pages (rounded up to whole leaves).
pub fn printed_page_count(pages: usize) -> u32 {
    let pages = u32::try_from(pages).unwrap_or(u32::MAX);
    pages.saturating_add(pages % 2)
}

// ────────────────────────────────────────────────────────────────────────────
// Cover dimensions
// ────────────────────────────────────────────────────────────────────────────

/// Full-wrap cover geometry, all lengths in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverDimensions {
    pub trim_width: f64,
    pub trim_height: f64,
    pub spine_width: f64,
    pub bleed: f64,
    /// back + spine + front + both bleed strips
    pub full_width: f64,
    /// trim + top and bottom bleed
    pub full_height: f64,
    /// How far content should stay inside the trim edges.
    pub safe_zone: f64,
    pub wrap_width: f64,
    pub wrap_height: f64,
}

pub fn cover_dimensions(
    trim_width: f64,
    trim_height: f64,
    page_count: f64,
    stock: &PaperStock,
    bleed: f64,
    safe_zone: f64,
) -> CoverDimensions {
    let spine = spine_width(page_count, stock);
    let full_width = bleed + trim_width + spine + trim_width + bleed;
    let full_height = bleed + trim_height + bleed;

    CoverDimensions {
        trim_width,
        trim_height,
        spine_width: spine,
        bleed,
        full_width,
        full_height,
        safe_zone,
        wrap_width: full_width,
        wrap_height: full_height,
    }
}

/// An axis-aligned rectangle on the flat cover, origin at the top-left bleed corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl GuideRect {
    fn inset(self, by: f64) -> GuideRect {
        GuideRect {
            x: self.x + by,
            y: self.y + by,
            width: self.width - by * 2.0,
            height: self.height - by * 2.0,
        }
    }

    fn to_millimeters(self) -> GuideRect {
        GuideRect {
            x: to_millimeters(self.x),
            y: to_millimeters(self.y),
            width: to_millimeters(self.width),
            height: to_millimeters(self.height),
        }
    }
}

/// Guide positions a cover-layout painter draws: trim boxes, spine folds, safe zones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverGuides {
    pub back_panel: GuideRect,
    pub spine: GuideRect,
    pub front_panel: GuideRect,
    pub back_safe: GuideRect,
    pub front_safe: GuideRect,
    /// x positions of the two fold lines
    pub spine_folds: [f64; 2],
    pub spine_center_x: f64,
}

impl CoverGuides {
    pub fn to_millimeters(&self) -> CoverGuides {
        CoverGuides {
            back_panel: self.back_panel.to_millimeters(),
            spine: self.spine.to_millimeters(),
            front_panel: self.front_panel.to_millimeters(),
            back_safe: self.back_safe.to_millimeters(),
            front_safe: self.front_safe.to_millimeters(),
            spine_folds: self.spine_folds.map(to_millimeters),
            spine_center_x: to_millimeters(self.spine_center_x),
        }
    }
}

impl CoverDimensions {
    pub fn guides(&self) -> CoverGuides {
        let back_start = self.bleed;
        let spine_start = back_start + self.trim_width;
        let front_start = spine_start + self.spine_width;

        let panel = |x: f64, width: f64| GuideRect {
            x,
            y: self.bleed,
            width,
            height: self.trim_height,
        };
        let back_panel = panel(back_start, self.trim_width);
        let front_panel = panel(front_start, self.trim_width);

        CoverGuides {
            back_panel,
            spine: panel(spine_start, self.spine_width),
            front_panel,
            back_safe: back_panel.inset(self.safe_zone),
            front_safe: front_panel.inset(self.safe_zone),
            spine_folds: [spine_start, front_start],
            spine_center_x: spine_start + self.spine_width / 2.0,
        }
    }

    /// Same geometry in millimetres, for the PDF emitter.
    pub fn to_millimeters(&self) -> CoverDimensions {
        CoverDimensions {
            trim_width: to_millimeters(self.trim_width),
            trim_height: to_millimeters(self.trim_height),
            spine_width: to_millimeters(self.spine_width),
            bleed: to_millimeters(self.bleed),
            full_width: to_millimeters(self.full_width),
            full_height: to_millimeters(self.full_height),
            safe_zone: to_millimeters(self.safe_zone),
            wrap_width: to_millimeters(self.wrap_width),
            wrap_height: to_millimeters(self.wrap_height),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
