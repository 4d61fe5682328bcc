//! Shared application state for all routes.

use crate::store::ProductStore;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    /// Directory holding `index.html` for the landing page.
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new<S: ProductStore + 'static>(store: S, static_dir: impl Into<PathBuf>) -> Self {
        AppState {
            store: Arc::new(store),
            static_dir: static_dir.into(),
        }
    }
}
