//! Shared test doubles for the MEMi content service.

mod upstream;

pub use upstream::{FailingUpstream, RawForward, StubUpstream};
