//! What a tool looks like to `tools/list`.

use schemars::{JsonSchema, schema_for};
use serde_json::{Map, Value};

/// Name, description and input schema of one tool.
#[derive(Debug, Clone)]
pub struct ToolMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Map<String, Value>,
}

/// JSON schema of an argument type, as the object MCP expects for `inputSchema`.
pub fn input_schema<T: JsonSchema>() -> Map<String, Value> {
    match schema_for!(T).to_value() {
        Value::Object(obj) => obj,
        _ => Map::new(),
    }
}
