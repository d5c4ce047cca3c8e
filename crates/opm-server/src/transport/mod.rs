//! Transport Layer
//!
//! MCP is served over stdin/stdout only.

pub mod stdio;

pub use stdio::StdioServerExt;
