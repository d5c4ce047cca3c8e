//! OctoPerf REST API adapter

pub mod client;

pub use client::OctoPerfClient;
