//! MCP server for full-text search in the Norwegian Digital Archives.
//!
//! [`archive`] talks to the transcription search API, [`tools`] defines the
//! `search_index` and `reindeer_search_index` tools, and [`stdio`] serves them.

pub mod archive;
pub mod stdio;
pub mod tools;
