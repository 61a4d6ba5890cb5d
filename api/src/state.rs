use crate::store::Store;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers. The store client is built
/// once at startup and injected here rather than referenced as a global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            started_at: Instant::now(),
        }
    }
}
