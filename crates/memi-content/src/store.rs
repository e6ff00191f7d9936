//! The content aggregate store.

use tokio::sync::RwLock;

use memi_core::error::ServiceError;

use crate::defaults;
use crate::model::HomeContent;
use crate::patch::HomeContentPatch;

/// Holds the current [`HomeContent`] value and applies partial updates
/// atomically.
///
/// Construct one per process (or per test) and share it behind an `Arc`.
/// Updates are serialized by the write lock: validation, the read of the
/// untouched sections and the write of the replaced ones all happen under
/// the same critical section, so two concurrent updates can never
/// read-modify-write stale copies of each other's sections.
#[derive(Debug)]
pub struct ContentStore {
    inner: RwLock<HomeContent>,
}

impl ContentStore {
    /// Creates a store seeded with the default aggregate.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(defaults::seed())
    }

    /// Creates a store seeded with the given aggregate.
    #[must_use]
    pub fn seeded(content: HomeContent) -> Self {
        Self {
            inner: RwLock::new(content),
        }
    }

    /// Returns the full current aggregate. Never fails; a fresh store
    /// returns the fully-populated default aggregate.
    pub async fn get(&self) -> HomeContent {
        self.inner.read().await.clone()
    }

    /// Applies a partial update and returns the resulting full aggregate.
    ///
    /// Each section present in the patch replaces the stored section in
    /// full; absent sections are left untouched. A rejected patch leaves
    /// the stored aggregate exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` if the patch violates a section
    /// invariant.
    pub async fn update(&self, patch: HomeContentPatch) -> Result<HomeContent, ServiceError> {
        let mut guard = self.inner.write().await;
        patch.validate()?;
        patch.apply_to(&mut guard);
        Ok(guard.clone())
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}
