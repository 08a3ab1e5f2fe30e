use std::sync::Arc;

use crate::config::Config;
use crate::typeset::RunIdSource;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds configuration and collaborators only. The engines are stateless, so there is
/// no per-document state here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Source of pagination run ids. Default: random v4 UUIDs.
    pub run_ids: Arc<dyn RunIdSource>,
}
