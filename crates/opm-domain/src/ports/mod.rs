//! Domain Port Interfaces
//!
//! Contracts implemented by the provider layer and consumed by the server.

/// Remote OctoPerf REST API
pub mod octoperf_api;

pub use octoperf_api::OctoPerfApi;
