//! # OctoPerf MCP Providers
//!
//! Adapters implementing the ports declared in `opm-domain`.
//!
//! | Provider | Port | Backend |
//! |----------|------|---------|
//! | [`OctoPerfClient`] | [`OctoPerfApi`](opm_domain::ports::OctoPerfApi) | OctoPerf REST API over `reqwest` |

pub mod constants;
pub mod http;
pub mod octoperf;

pub use octoperf::OctoPerfClient;
