//! Shared application state.

use std::sync::Arc;

use memi_content::ContentStore;
use memi_core::upstream::Upstream;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The content aggregate store.
    pub content: Arc<ContentStore>,
    /// Transport to the external backend.
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(content: Arc<ContentStore>, upstream: Arc<dyn Upstream>) -> Self {
        Self { content, upstream }
    }
}
