//! Axum route handlers for the Typesetting API: font and preset catalogs, preset
//! application and pagination.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::dimensions::spine_width;
use crate::dimensions::units::{format_length, Unit};
use crate::errors::AppError;
use crate::state::AppState;
use crate::typeset::fonts::{BookFont, BOOK_FONTS};
use crate::typeset::frame::{frame_page, PageFrame};
use crate::typeset::manuscript::{manuscript_stats, parse_manuscript, ManuscriptStats};
use crate::typeset::metrics::PageCapacity;
use crate::typeset::paginator::{paginate, Page};
use crate::typeset::presets::{apply_preset, find_preset, Preset, PresetSelector, PRESETS};
use crate::typeset::settings::{ConfigWarning, Settings};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct FontCatalogResponse {
    pub fonts: &'static [BookFont],
}

#[derive(Debug, Serialize)]
pub struct PresetCatalogResponse {
    pub presets: &'static [Preset],
}

#[derive(Debug, Deserialize)]
pub struct ApplyPresetRequest {
    #[serde(default)]
    pub settings: Settings,
    pub preset: PresetSelector,
}

#[derive(Debug, Serialize)]
pub struct ApplyPresetResponse {
    pub settings: Settings,
    pub applied: bool,
}

#[derive(Debug, Deserialize)]
pub struct PaginateRequest {
    pub manuscript: String,
    #[serde(default)]
    pub settings: Settings,
    /// Also return each page as plain text, for previews and text exports.
    #[serde(default)]
    pub plain_text: bool,
}

/// Spine width implied by the current page count, for the live cover preview.
#[derive(Debug, Serialize)]
pub struct SpineEstimate {
    pub printed_page_count: u32,
    pub paper_stock: &'static str,
    pub spine_width: f64,
    pub spine_width_label: String,
}

#[derive(Debug, Serialize)]
pub struct PaginateResponse {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub trim_label: String,
    /// Resolved body face, after any fallback.
    pub font: &'static BookFont,
    pub pages: Vec<Page>,
    /// One frame per page, lengths in the requested display unit.
    pub frames: Vec<PageFrame>,
    /// One string per page, present when the request asked for plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<Vec<String>>,
    pub capacity: PageCapacity,
    pub warnings: Vec<ConfigWarning>,
    pub stats: ManuscriptStats,
    pub spine: SpineEstimate,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/catalog/fonts
pub async fn handle_list_fonts() -> Json<FontCatalogResponse> {
    Json(FontCatalogResponse { fonts: &BOOK_FONTS })
}

/// GET /api/v1/presets
pub async fn handle_list_presets() -> Json<PresetCatalogResponse> {
    Json(PresetCatalogResponse { presets: &PRESETS })
}

/// GET /api/v1/presets/:name
///
/// Name lookup is case-insensitive. Path segments arrive percent-decoded.
pub async fn handle_get_preset(Path(name): Path<String>) -> Result<Json<Preset>, AppError> {
    find_preset(&PresetSelector::Name(name.clone()))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Preset '{name}' not found")))
}

/// POST /api/v1/presets/apply
///
/// Merges the selected preset onto the given settings. An unknown selector is not an
/// error: the settings come back unchanged with `applied: false`.
pub async fn handle_apply_preset(
    Json(request): Json<ApplyPresetRequest>,
) -> Json<ApplyPresetResponse> {
    let mut settings = request.settings;
    let applied = apply_preset(&mut settings, &request.preset);
    Json(ApplyPresetResponse { settings, applied })
}

/// POST /api/v1/typeset/paginate
///
/// Lays out the manuscript and returns pages, frames and the spine estimate. Bad
/// configuration degrades with warnings; only an oversized manuscript is rejected.
pub async fn handle_paginate(
    State(state): State<AppState>,
    Json(request): Json<PaginateRequest>,
) -> Result<Json<PaginateResponse>, AppError> {
    let limit = state.config.max_manuscript_bytes;
    if request.manuscript.len() > limit {
        return Err(AppError::PayloadTooLarge {
            actual: request.manuscript.len(),
            limit,
        });
    }

    let run_id = state.run_ids.next_id();
    let PaginateRequest {
        manuscript,
        settings,
        plain_text,
    } = request;

    let response = tokio::task::spawn_blocking(move || {
        run_pagination(run_id, &manuscript, &settings, plain_text)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in pagination: {e}")))?;

    info!(
        %run_id,
        pages = response.pages.len(),
        warnings = response.warnings.len(),
        "Pagination complete"
    );

    Ok(Json(response))
}

/// The blocking part of a paginate request. Owns nothing shared with other runs.
fn run_pagination(
    run_id: Uuid,
    manuscript: &str,
    settings: &Settings,
    include_plain_text: bool,
) -> PaginateResponse {
    let mut warnings = Vec::new();
    let (trim, trim_warning) = settings.resolve_trim();
    warnings.extend(trim_warning);
    let (stock, stock_warning) = settings.resolve_paper_stock();
    warnings.extend(stock_warning);
    let (font, font_warning) = settings.resolve_font();
    warnings.extend(font_warning);

    let pagination = paginate(manuscript, settings, &trim);
    warnings.extend(pagination.warnings.iter().cloned());
    if pagination.is_empty() {
        debug!(%run_id, "Manuscript has no text; returning no pages");
    }

    let frames = pagination
        .pages
        .iter()
        .map(|page| {
            let frame = frame_page(page, settings, &trim);
            match settings.unit {
                Unit::Inches => frame,
                Unit::Millimeters => frame.to_millimeters(),
            }
        })
        .collect();

    let plain_text = include_plain_text
        .then(|| pagination.pages.iter().map(Page::plain_text).collect());

    let printed = pagination.printed_page_count();
    let spine = spine_width(f64::from(printed), stock);
    let stats = manuscript_stats(manuscript, &parse_manuscript(manuscript));

    PaginateResponse {
        run_id,
        generated_at: Utc::now(),
        trim_label: trim.label,
        font,
        frames,
        plain_text,
        capacity: pagination.capacity,
        pages: pagination.pages,
        warnings,
        stats,
        spine: SpineEstimate {
            printed_page_count: printed,
            paper_stock: stock.name,
            spine_width: spine,
            spine_width_label: format_length(
                spine,
                settings.unit,
                settings.unit.default_precision(),
            ),
        },
    }
}
