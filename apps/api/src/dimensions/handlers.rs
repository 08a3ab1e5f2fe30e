//! Axum route handlers for the Dimensions API: trim and paper catalogs, the cover-wrap
//! calculator and the bookshelf spine estimate.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dimensions::cover::{
    cover_dimensions, spine_width, CoverDimensions, CoverGuides, DEFAULT_BLEED_IN,
    DEFAULT_SAFE_ZONE_IN,
};
use crate::dimensions::paper::{kdp_spine_width, KdpInterior, PaperStock, PAPER_STOCKS};
use crate::dimensions::trim::{trim_sizes_by_category, TrimGroup, TrimSelection};
use crate::dimensions::units::{format_length, Unit};
use crate::errors::AppError;
use crate::typeset::settings::{resolve_paper_stock_index, ConfigWarning};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TrimCatalogResponse {
    pub groups: Vec<TrimGroup>,
}

#[derive(Debug, Serialize)]
pub struct PaperCatalogResponse {
    pub paper_stocks: &'static [PaperStock],
}

#[derive(Debug, Deserialize)]
pub struct CoverRequest {
    #[serde(default)]
    pub trim: TrimSelection,
    pub page_count: f64,
    #[serde(default)]
    pub paper_stock: usize,
    pub bleed: Option<f64>,
    pub safe_zone: Option<f64>,
    /// Unit of the custom trim, bleed and safe zone given in this request. Default: inches.
    pub input_unit: Option<Unit>,
    /// Unit of the returned geometry and labels. Default: inches.
    pub unit: Option<Unit>,
}

/// Display strings in the requested unit.
#[derive(Debug, Serialize)]
pub struct CoverLabels {
    pub trim: String,
    pub spine_width: String,
    pub full_size: String,
    pub bleed: String,
    pub safe_zone: String,
}

#[derive(Debug, Serialize)]
pub struct CoverResponse {
    pub unit: Unit,
    pub trim_label: String,
    pub paper_stock: &'static str,
    /// Lengths in `unit`.
    pub dimensions: CoverDimensions,
    pub guides: CoverGuides,
    pub labels: CoverLabels,
    pub warnings: Vec<ConfigWarning>,
}

#[derive(Debug, Deserialize)]
pub struct SpineRequest {
    pub page_count: f64,
    pub paper_stock: Option<usize>,
    /// Uses a fixed per-page factor instead of the stock's ppi when given.
    pub kdp_interior: Option<KdpInterior>,
}

#[derive(Debug, Serialize)]
pub struct SpineResponse {
    /// Inches.
    pub spine_width: f64,
    pub spine_width_label: String,
    pub spine_width_mm_label: String,
    pub warnings: Vec<ConfigWarning>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/catalog/trim-sizes
pub async fn handle_list_trim_sizes() -> Json<TrimCatalogResponse> {
    Json(TrimCatalogResponse {
        groups: trim_sizes_by_category(),
    })
}

/// GET /api/v1/catalog/paper-stocks
pub async fn handle_list_paper_stocks() -> Json<PaperCatalogResponse> {
    Json(PaperCatalogResponse {
        paper_stocks: &PAPER_STOCKS,
    })
}

/// POST /api/v1/cover/dimensions
///
/// The geometry functions do not validate, so inputs are checked here. An unknown trim
/// or paper stock falls back to the catalog default with a warning, the same as
/// pagination does.
pub async fn handle_cover_dimensions(
    Json(request): Json<CoverRequest>,
) -> Result<Json<CoverResponse>, AppError> {
    let input_unit = request.input_unit.unwrap_or(Unit::Inches);
    let bleed = request
        .bleed
        .map_or(DEFAULT_BLEED_IN, |b| input_unit.length_to_inches(b));
    let safe_zone = request
        .safe_zone
        .map_or(DEFAULT_SAFE_ZONE_IN, |z| input_unit.length_to_inches(z));
    require_non_negative("page_count", request.page_count)?;
    require_non_negative("bleed", bleed)?;
    require_non_negative("safe_zone", safe_zone)?;

    let trim_selection = match request.trim {
        TrimSelection::Custom { width, height } => TrimSelection::Custom {
            width: input_unit.length_to_inches(width),
            height: input_unit.length_to_inches(height),
        },
        named => named,
    };

    let mut warnings = Vec::new();
    let (trim, fallback) = trim_selection.resolve();
    warnings.extend(fallback.map(|f| ConfigWarning::from_trim_fallback(f, &trim.label)));
    let (stock, stock_warning) = resolve_paper_stock_index(request.paper_stock);
    warnings.extend(stock_warning);

    let dimensions = cover_dimensions(
        trim.width,
        trim.height,
        request.page_count,
        stock,
        bleed,
        safe_zone,
    );
    let unit = request.unit.unwrap_or(Unit::Inches);
    let labels = cover_labels(&dimensions, unit);
    let guides = dimensions.guides();
    debug!(
        trim = %trim.label,
        spine = dimensions.spine_width,
        "Computed cover dimensions"
    );

    let (dimensions, guides) = match unit {
        Unit::Inches => (dimensions, guides),
        Unit::Millimeters => (dimensions.to_millimeters(), guides.to_millimeters()),
    };

    Ok(Json(CoverResponse {
        unit,
        trim_label: trim.label,
        paper_stock: stock.name,
        dimensions,
        guides,
        labels,
        warnings,
    }))
}

/// POST /api/v1/cover/spine
///
/// Spine estimate for bookshelf previews. `page_count` is in printed faces.
pub async fn handle_spine_width(
    Json(request): Json<SpineRequest>,
) -> Result<Json<SpineResponse>, AppError> {
    require_non_negative("page_count", request.page_count)?;

    let mut warnings = Vec::new();
    let width = match request.kdp_interior {
        Some(interior) => kdp_spine_width(request.page_count, interior),
        None => {
            let (stock, stock_warning) =
                resolve_paper_stock_index(request.paper_stock.unwrap_or(0));
            warnings.extend(stock_warning);
            spine_width(request.page_count, stock)
        }
    };

    Ok(Json(SpineResponse {
        spine_width: width,
        spine_width_label: format_length(width, Unit::Inches, Unit::Inches.default_precision()),
        spine_width_mm_label: format_length(
            width,
            Unit::Millimeters,
            Unit::Millimeters.default_precision(),
        ),
        warnings,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn require_non_negative(field: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Validation(format!(
            "{field} must be a finite, non-negative number"
        )));
    }
    Ok(())
}

fn cover_labels(dimensions: &CoverDimensions, unit: Unit) -> CoverLabels {
    let precision = unit.default_precision();
    let fmt = |inches: f64| format_length(inches, unit, precision);
    CoverLabels {
        trim: format!("{} × {}", fmt(dimensions.trim_width), fmt(dimensions.trim_height)),
        spine_width: fmt(dimensions.spine_width),
        full_size: format!("{} × {}", fmt(dimensions.full_width), fmt(dimensions.full_height)),
        bleed: fmt(dimensions.bleed),
        safe_zone: fmt(dimensions.safe_zone),
    }
}
