// Pagination engine: manuscript parsing, capacity estimation, wrapping, page breaking,
// page frames and typographic presets.
// Pagination is CPU-bound; the HTTP handlers run it inside tokio::task::spawn_blocking.

pub mod fonts;
pub mod frame;
pub mod handlers;
pub mod manuscript;
pub mod metrics;
pub mod paginator;
pub mod presets;
pub mod run_id;
pub mod settings;
pub mod wrap;

// Re-export the run id seam consumed by state and main.
pub use run_id::{RandomRunIds, RunIdSource};
