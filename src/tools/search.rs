//! The two archive search tools.

use schemars::JsonSchema;
use serde::Deserialize;

use super::types::{ToolMetadata, input_schema};
use crate::archive::{SearchRequest, SearchScope};

pub const SEARCH_INDEX: &str = "search_index";
pub const REINDEER_SEARCH_INDEX: &str = "reindeer_search_index";

const SEARCH_INDEX_DESCRIPTION: &str = "\
Full-text search in transcribed documents from the Norwegian National Archives (Arkivverket).
Search queries must be provided in Norwegian only!

Arguments:
- query_term: search term in Norwegian.
- start_date: only documents from this date onwards, formatted YYYY-MM-DD.
- end_date: only documents up to this date, formatted YYYY-MM-DD.

Returns a list of matching documents with the fields:
- id: reference id of the document
- text: transcribed text content of the document (or part of it)
- archiveUnitName: name of the archive unit the document belongs to
- sourceTitleNb: name of the archive, archive reference, protocol number etc. for the document
- sourceStartYear: start year of the source collection
- sourceEndYear: end year of the source collection
- thumbnailUrl: URL of the digitized document";

const REINDEER_SEARCH_INDEX_DESCRIPTION: &str = "\
Full-text search in the transcribed diaries and logs of the reindeer administrators in northern Norway.
The archive also holds material from the regional board, the earmarking committee and the reindeer
husbandry funds in Nordland, covering the years 1898 to 2003.
Search queries must be provided in Norwegian only!

Arguments:
- query_term: search term in Norwegian.
- start_date: only documents from this date onwards, formatted YYYY-MM-DD.
- end_date: only documents up to this date, formatted YYYY-MM-DD.

Returns a list of matching documents with the fields:
- id: reference id of the document
- text: transcribed text content of the document (or part of it)
- archiveUnitName: name of the archive unit the document belongs to
- sourceTitleNb: name of the archive, archive reference, protocol number etc. for the document
- sourceStartYear: start year of the source collection
- sourceEndYear: end year of the source collection
- thumbnailUrl: URL of the digitized document";

/// Arguments shared by both search tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchIndexArgs {
    /// Search term in Norwegian.
    pub query_term: String,

    /// Search documents from this date onwards (YYYY-MM-DD).
    #[serde(default)]
    #[schemars(extend("format" = "date"))]
    pub start_date: Option<String>,

    /// Search documents up to this date (YYYY-MM-DD).
    #[serde(default)]
    #[schemars(extend("format" = "date"))]
    pub end_date: Option<String>,
}

impl From<SearchIndexArgs> for SearchRequest {
    fn from(args: SearchIndexArgs) -> Self {
        Self {
            query_term: args.query_term,
            start_date: args.start_date,
            end_date: args.end_date,
        }
    }
}

/// A search tool: a name bound to one archive scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTool {
    pub name: &'static str,
    pub description: &'static str,
    pub scope: SearchScope,
}

impl SearchTool {
    /// Every search tool this server can expose.
    pub fn all() -> Vec<SearchTool> {
        vec![
            SearchTool {
                name: SEARCH_INDEX,
                description: SEARCH_INDEX_DESCRIPTION,
                scope: SearchScope::General,
            },
            SearchTool {
                name: REINDEER_SEARCH_INDEX,
                description: REINDEER_SEARCH_INDEX_DESCRIPTION,
                scope: SearchScope::ReindeerAdministration,
            },
        ]
    }

    pub fn metadata(&self) -> ToolMetadata {
        ToolMetadata {
            name: self.name,
            description: self.description,
            input_schema: input_schema::<SearchIndexArgs>(),
        }
    }
}
