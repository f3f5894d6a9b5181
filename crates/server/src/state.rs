use std::sync::Arc;

use service::person::{PersonRepository, PersonStore};

/// Shared handler state. Cloned per request; the store itself is shared.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PersonRepository>,
    /// Body limit applied to `POST /person/import`.
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn PersonRepository>, max_upload_bytes: usize) -> Self {
        Self { store, max_upload_bytes }
    }

    /// Fresh empty in-memory store.
    pub fn in_memory(max_upload_bytes: usize) -> Self {
        Self::new(Arc::new(PersonStore::new()), max_upload_bytes)
    }
}
