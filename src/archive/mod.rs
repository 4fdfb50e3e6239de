//! Transcription search against the Norwegian Digital Archives.

pub mod client;
pub mod date;
pub mod error;
pub mod record;
pub mod request;
pub mod scope;
pub mod url;

pub use client::ArchiveClient;
pub use date::is_valid_date;
pub use error::SearchError;
pub use record::{NormalizedResultRecord, RawResultRecord, RecordId, SearchEnvelope};
pub use request::SearchRequest;
pub use scope::{DEFAULT_API_BASE, REINDEER_ARCHIVE_ID, SearchScope};
pub use url::build_search_url;
