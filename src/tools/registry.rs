//! Explicitly constructed set of tools handed to the server at startup.

use std::collections::HashSet;

use serde_json::{Map, Value};
use thiserror::Error;

use super::search::{SearchIndexArgs, SearchTool};
use super::types::ToolMetadata;
use crate::archive::{ArchiveClient, NormalizedResultRecord, SearchError, SearchRequest};

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for '{tool}': {source}")]
    InvalidParams {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Tools available to callers, bound to one archive client.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    client: ArchiveClient,
    tools: Vec<SearchTool>,
}

impl ToolRegistry {
    /// Registry with every search tool enabled.
    pub fn new(client: ArchiveClient) -> Self {
        Self {
            client,
            tools: SearchTool::all(),
        }
    }

    /// Keep only the tools named in `enabled`.
    pub fn retain_enabled(&mut self, enabled: &HashSet<String>) {
        self.tools.retain(|tool| enabled.contains(tool.name));
    }

    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name).collect()
    }

    pub fn definitions(&self) -> Vec<ToolMetadata> {
        self.tools.iter().map(SearchTool::metadata).collect()
    }

    pub fn get(&self, name: &str) -> Option<&SearchTool> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    /// Invoke tool `name` with raw JSON `arguments`.
    pub async fn call(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<Vec<NormalizedResultRecord>, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let args: SearchIndexArgs = serde_json::from_value(Value::Object(arguments))
            .map_err(|source| ToolError::InvalidParams {
                tool: name.to_string(),
                source,
            })?;

        let request = SearchRequest::from(args);
        Ok(self.client.search(tool.scope, &request).await?)
    }
}

/// Names of every tool this server can expose.
pub fn available_tools() -> Vec<&'static str> {
    SearchTool::all().iter().map(|tool| tool.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{REINDEER_SEARCH_INDEX, SEARCH_INDEX};
    use serde_json::json;

    // Nothing listens on port 1; any request that gets this far fails as transport.
    fn registry() -> ToolRegistry {
        ToolRegistry::new(ArchiveClient::new("http://127.0.0.1:1").unwrap())
    }

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn lists_both_tools() {
        let registry = registry();
        assert_eq!(registry.tool_names(), vec![SEARCH_INDEX, REINDEER_SEARCH_INDEX]);
        assert_eq!(registry.definitions().len(), 2);
        assert_eq!(available_tools(), registry.tool_names());
    }

    #[test]
    fn retain_enabled_filters() {
        let mut registry = registry();
        registry.retain_enabled(&HashSet::from([REINDEER_SEARCH_INDEX.to_string()]));
        assert_eq!(registry.tool_names(), vec![REINDEER_SEARCH_INDEX]);
        assert!(registry.get(SEARCH_INDEX).is_none());
    }

    #[tokio::test]
    async fn unknown_tool() {
        let err = registry()
            .call("delete_archive", args(json!({"query_term": "x"})))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(name) if name == "delete_archive"));
    }

    #[tokio::test]
    async fn missing_query_term() {
        let err = registry()
            .call(SEARCH_INDEX, args(json!({"start_date": "2020-01-01"})))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidParams { .. }));
    }

    #[tokio::test]
    async fn invalid_date_is_rejected_before_network() {
        let err = registry()
            .call(
                REINDEER_SEARCH_INDEX,
                args(json!({"query_term": "rein", "start_date": "2020-13-01"})),
            )
            .await
            .unwrap_err();
        match err {
            ToolError::Search(SearchError::InvalidArgument(msg)) => {
                assert_eq!(msg, "start_date must be in YYYY-MM-DD format")
            }
            other => panic!("expected invalid argument, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        let err = registry()
            .call(SEARCH_INDEX, args(json!({"query_term": "rein"})))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Search(SearchError::Transport { .. })));
        assert!(err.to_string().starts_with("API request failed: "));
    }
}
