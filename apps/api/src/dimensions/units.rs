//! Length units and conversion helpers.
//!
//! The canonical unit everywhere inside the crate is the inch. Millimetres exist
//! only for display and for the PDF emitter boundary; points only for the
//! capacity estimate.

use serde::{Deserialize, Serialize};

pub const MM_PER_INCH: f64 = 25.4;
pub const POINTS_PER_INCH: f64 = 72.0;

/// Display unit preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "mm")]
    Millimeters,
}

impl Unit {
    /// Decimal places used when the caller does not ask for a specific precision.
    pub fn default_precision(self) -> usize {
        match self {
            Unit::Inches => 3,
            Unit::Millimeters => 1,
        }
    }

    /// Converts a length entered in this unit to inches.
    pub fn length_to_inches(self, value: f64) -> f64 {
        match self {
            Unit::Inches => value,
            Unit::Millimeters => to_inches(value),
        }
    }
}

pub fn to_millimeters(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn to_inches(millimeters: f64) -> f64 {
    millimeters / MM_PER_INCH
}

pub fn to_points(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

/// Formats a length given in inches for display in `unit`.
///
/// Inches render as `6.000"`, millimetres as `152.4 mm`.
pub fn format_length(inches: f64, unit: Unit, precision: usize) -> String {
    match unit {
        Unit::Inches => format!("{inches:.precision$}\""),
        Unit::Millimeters => format!("{:.precision$} mm", to_millimeters(inches)),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
