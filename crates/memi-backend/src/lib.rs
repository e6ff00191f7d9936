//! MEMi — outbound transport to the external content backend.

mod client;

pub use client::BackendClient;
