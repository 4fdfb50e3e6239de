//! Which part of the archive a search is restricted to.

/// Path of the transcription search endpoint on the archive host.
pub const TRANSCRIPTION_SEARCH_PATH: &str = "/api/media-file/search/transcription";

/// Archive identifier of the reindeer administration collection (1898-2003).
pub const REINDEER_ARCHIVE_ID: &str = "no-a1450-08000000280505";

/// Default archive host.
pub const DEFAULT_API_BASE: &str = "https://nye.digitalarkivet.no";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Every transcribed document in the archive.
    General,
    /// Only the reindeer administration archive.
    ReindeerAdministration,
}

impl SearchScope {
    /// Base endpoint for this scope, ending with the term key `s=`.
    ///
    /// The archive scope parameter is always placed ahead of the term.
    pub fn endpoint(self, api_base: &str) -> String {
        let api_base = api_base.trim_end_matches('/');
        match self {
            Self::General => format!("{api_base}{TRANSCRIPTION_SEARCH_PATH}?s="),
            Self::ReindeerAdministration => format!(
                "{api_base}{TRANSCRIPTION_SEARCH_PATH}?archives[]={REINDEER_ARCHIVE_ID}&s="
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_endpoint() {
        assert_eq!(
            SearchScope::General.endpoint(DEFAULT_API_BASE),
            "https://nye.digitalarkivet.no/api/media-file/search/transcription?s="
        );
    }

    #[test]
    fn reindeer_endpoint_pins_archive_before_term() {
        let endpoint = SearchScope::ReindeerAdministration.endpoint("http://127.0.0.1:9999/");
        assert_eq!(
            endpoint,
            "http://127.0.0.1:9999/api/media-file/search/transcription?archives[]=no-a1450-08000000280505&s="
        );
        let scope_at = endpoint.find("archives[]=").unwrap();
        let term_at = endpoint.find("&s=").unwrap();
        assert!(scope_at < term_at);
    }
}
