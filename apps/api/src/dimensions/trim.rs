//! Trim size catalog and trim resolution.

use serde::{Deserialize, Serialize};

/// A named physical page size. Dimensions are in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrimSize {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
    pub category: &'static str,
}

pub const DEFAULT_TRIM_NAME: &str = "5.5\" × 8.5\"";

pub static TRIM_SIZES: [TrimSize; 15] = [
    // US Trade
    trim("5\" × 8\"", 5.0, 8.0, "US Trade"),
    trim("5.25\" × 8\"", 5.25, 8.0, "US Trade"),
    trim("5.5\" × 8.5\"", 5.5, 8.5, "US Trade"),
    trim("6\" × 9\"", 6.0, 9.0, "US Trade"),
    trim("7\" × 10\"", 7.0, 10.0, "US Trade"),
    trim("8\" × 10\"", 8.0, 10.0, "US Trade"),
    trim("8.5\" × 11\"", 8.5, 11.0, "US Trade"),
    // ISO A-Series
    trim("A4 (210 × 297 mm)", 8.268, 11.693, "ISO A-Series"),
    trim("A5 (148 × 210 mm)", 5.827, 8.268, "ISO A-Series"),
    trim("A6 (105 × 148 mm)", 4.134, 5.827, "ISO A-Series"),
    // ISO B-Series
    trim("B5 (176 × 250 mm)", 6.929, 9.843, "ISO B-Series"),
    trim("B6 (125 × 176 mm)", 4.921, 6.929, "ISO B-Series"),
    // UK / Commonwealth
    trim("Royal (6.14\" × 9.21\")", 6.14, 9.21, "UK"),
    trim("Crown Quarto (7.44\" × 9.69\")", 7.44, 9.69, "UK"),
    trim("Demy (5.43\" × 8.5\")", 5.43, 8.5, "UK"),
];

const fn trim(name: &'static str, width: f64, height: f64, category: &'static str) -> TrimSize {
    TrimSize {
        name,
        width,
        height,
        category,
    }
}

pub fn find_trim(name: &str) -> Option<&'static TrimSize> {
    TRIM_SIZES.iter().find(|t| t.name == name)
}

pub fn default_trim() -> &'static TrimSize {
    // The default name is a catalog constant; index 2 is the same entry.
    find_trim(DEFAULT_TRIM_NAME).unwrap_or(&TRIM_SIZES[2])
}

/// A category heading with its trim sizes, in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct TrimGroup {
    pub category: &'static str,
    pub sizes: Vec<&'static TrimSize>,
}

/// Groups the catalog by category for selector UIs. Category order follows first appearance.
pub fn trim_sizes_by_category() -> Vec<TrimGroup> {
    let mut groups: Vec<TrimGroup> = Vec::new();
    for size in TRIM_SIZES.iter() {
        match groups.iter_mut().find(|g| g.category == size.category) {
            Some(group) => group.sizes.push(size),
            None => groups.push(TrimGroup {
                category: size.category,
                sizes: vec![size],
            }),
        }
    }
    groups
}

// ────────────────────────────────────────────────────────────────────────────
// Selection & resolution
// ────────────────────────────────────────────────────────────────────────────

/// How a caller picks the page size: a catalog name or a custom width × height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrimSelection {
    Named { name: String },
    Custom { width: f64, height: f64 },
}

impl Default for TrimSelection {
    fn default() -> Self {
        TrimSelection::Named {
            name: DEFAULT_TRIM_NAME.to_string(),
        }
    }
}

/// Concrete trim dimensions after resolving a `TrimSelection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTrim {
    pub width: f64,
    pub height: f64,
    pub label: String,
}

impl From<&TrimSize> for ResolvedTrim {
    fn from(size: &TrimSize) -> Self {
        ResolvedTrim {
            width: size.width,
            height: size.height,
            label: size.name.to_string(),
        }
    }
}

/// Why a trim selection could not be honoured as given.
#[derive(Debug, Clone, PartialEq)]
pub enum TrimFallback {
    UnknownName(String),
    InvalidCustom { width: f64, height: f64 },
}

impl TrimSelection {
    /// Resolves to concrete dimensions. Unknown names and non-positive custom sizes fall
    /// back to the default catalog entry and report why.
    pub fn resolve(&self) -> (ResolvedTrim, Option<TrimFallback>) {
        match self {
            TrimSelection::Named { name } => match find_trim(name) {
                Some(size) => (size.into(), None),
                None => (
                    default_trim().into(),
                    Some(TrimFallback::UnknownName(name.clone())),
                ),
            },
            TrimSelection::Custom { width, height } => {
                let printable =
                    width.is_finite() && height.is_finite() && *width > 0.0 && *height > 0.0;
                if printable {
                    (
                        ResolvedTrim {
                            width: *width,
                            height: *height,
                            label: format!("Custom ({width}\" × {height}\")"),
                        },
                        None,
                    )
                } else {
                    (
                        default_trim().into(),
                        Some(TrimFallback::InvalidCustom {
                            width: *width,
                            height: *height,
                        }),
                    )
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
