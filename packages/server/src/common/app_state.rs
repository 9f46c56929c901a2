//! Shared application state handed to every request handler.

use std::sync::Arc;

use crate::domains::activities::ActivityDirectory;

/// Application state shared across handlers.
///
/// Built once at startup (or once per test) and cloned cheaply into each
/// request; the directory itself is shared, not copied.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<ActivityDirectory>,
}

impl AppState {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ActivityDirectory::with_default_seed())
    }
}
