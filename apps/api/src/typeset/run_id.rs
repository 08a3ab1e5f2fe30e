//! Identifiers for pagination runs.
//!
//! Clients repaginate on every settings change and keep only the newest result; the run
//! id lets them tell results apart. Ids come from an injected source so tests can pin
//! them and nothing in the process keeps a shared counter.

use uuid::Uuid;

pub trait RunIdSource: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRunIds;

impl RunIdSource for RandomRunIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
