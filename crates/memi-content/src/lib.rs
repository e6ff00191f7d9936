//! MEMi — home-page content aggregate.
//!
//! The `HomeContent` aggregate groups the independently-editable sections of
//! the marketing home page. Section editors read the whole aggregate and
//! write back one section at a time through [`patch::HomeContentPatch`];
//! [`store::ContentStore`] applies those patches atomically.

pub mod defaults;
pub mod model;
pub mod patch;
pub mod store;

pub use model::HomeContent;
pub use patch::HomeContentPatch;
pub use store::ContentStore;
