//! Tool definitions exposed over MCP.

mod registry;
mod search;
mod types;

pub use registry::{ToolError, ToolRegistry, available_tools};
pub use search::{REINDEER_SEARCH_INDEX, SEARCH_INDEX, SearchIndexArgs, SearchTool};
pub use types::{ToolMetadata, input_schema};
