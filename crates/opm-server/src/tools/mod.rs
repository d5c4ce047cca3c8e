//! MCP Tools Module
//!
//! Tool catalog, schema registry and call routing.

pub mod operation;
pub mod registry;
pub mod router;

pub use operation::Operation;
pub use registry::{ToolDefinitions, create_tool_list};
pub use router::{ToolHandlers, dispatch_tool_call, route_tool_call};
