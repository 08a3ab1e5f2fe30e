//! Paper stock catalog.
//!
//! `ppi` is pages per inch of spine: how many printed page faces stack up to one inch.
//! Printers publish these per stock; the figures below are typical offset values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaperStock {
    pub name: &'static str,
    pub description: &'static str,
    pub ppi: f64,
}

pub static PAPER_STOCKS: [PaperStock; 7] = [
    stock("White Uncoated (50#)", "Standard white, lightweight", 526.0),
    stock("White Uncoated (60#)", "Standard white, medium", 456.0),
    stock("Cream/Natural (50#)", "Cream offset, lightweight", 444.0),
    stock("Cream/Natural (60#)", "Cream offset, medium", 382.0),
    stock("White Coated (70#)", "Glossy/matte coated", 388.0),
    stock("White Coated (80#)", "Heavy coated, color books", 334.0),
    stock("Groundwood (55#)", "Newsprint-like, mass market", 480.0),
];

const fn stock(name: &'static str, description: &'static str, ppi: f64) -> PaperStock {
    PaperStock {
        name,
        description,
        ppi,
    }
}

/// Looks up a stock by catalog index.
pub fn paper_stock(index: usize) -> Option<&'static PaperStock> {
    PAPER_STOCKS.get(index)
}

/// Looks up a stock by index, falling back to the first stock. The flag is true on fallback.
pub fn paper_stock_or_default(index: usize) -> (&'static PaperStock, bool) {
    match paper_stock(index) {
        Some(stock) => (stock, false),
        None => (&PAPER_STOCKS[0], true),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// KDP interior factors
// ────────────────────────────────────────────────────────────────────────────

/// Interior types with a fixed inches-per-page spine factor (KDP-compatible).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KdpInterior {
    BlackWhiteOnWhite,
    BlackWhiteOnCream,
    Color,
}

impl KdpInterior {
    pub fn inches_per_page(self) -> f64 {
        match self {
            KdpInterior::BlackWhiteOnWhite => 0.002252,
            KdpInterior::BlackWhiteOnCream => 0.002347,
            KdpInterior::Color => 0.002347,
        }
    }
}

/// Spine width from a per-page factor instead of a stock's ppi.
pub fn kdp_spine_width(page_count: f64, interior: KdpInterior) -> f64 {
    page_count * interior.inches_per_page()
}
