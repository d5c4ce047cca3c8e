//! Configuration management
//!
//! - `types.rs` - serializable configuration structures
//! - `loader.rs` - layered loading (defaults, TOML, environment) and validation

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, OctoPerfConfig};
