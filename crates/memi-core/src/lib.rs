//! MEMi Core — shared service abstractions.
//!
//! This crate defines the error taxonomy and the upstream-backend seam that
//! the rest of the service depends on. It contains no infrastructure code.

pub mod error;
pub mod upstream;
