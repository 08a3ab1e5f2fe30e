pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::dimensions::handlers as dimensions;
use crate::state::AppState;
use crate::typeset::handlers as typeset;

/// Worst-case JSON growth of a manuscript byte: a control character escaped as `\u00XX`.
const JSON_ESCAPE_FACTOR: usize = 6;
/// Headroom for the settings object and the rest of the envelope.
const BODY_LIMIT_SLACK: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    // The manuscript limit is enforced in the handler with a JSON error; the body limit
    // only has to let such requests through.
    let body_limit = state
        .config
        .max_manuscript_bytes
        .saturating_mul(JSON_ESCAPE_FACTOR)
        .saturating_add(BODY_LIMIT_SLACK);

    Router::new()
        .route("/health", get(health::health_handler))
        // Catalogs
        .route(
            "/api/v1/catalog/trim-sizes",
            get(dimensions::handle_list_trim_sizes),
        )
        .route(
            "/api/v1/catalog/paper-stocks",
            get(dimensions::handle_list_paper_stocks),
        )
        .route("/api/v1/catalog/fonts", get(typeset::handle_list_fonts))
        // Presets
        .route("/api/v1/presets", get(typeset::handle_list_presets))
        .route("/api/v1/presets/apply", post(typeset::handle_apply_preset))
        .route("/api/v1/presets/:name", get(typeset::handle_get_preset))
        // Typesetting
        .route("/api/v1/typeset/paginate", post(typeset::handle_paginate))
        // Cover geometry
        .route(
            "/api/v1/cover/dimensions",
            post(dimensions::handle_cover_dimensions),
        )
        .route("/api/v1/cover/spine", post(dimensions::handle_spine_width))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
