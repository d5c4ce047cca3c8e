//! HTTP Utilities
//!
//! Shared helpers for turning a `reqwest` exchange into the domain outcome.

pub mod response;

pub use response::HttpResponseUtils;
