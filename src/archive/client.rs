//! HTTP access to the transcription search API.

use super::{
    NormalizedResultRecord, SearchEnvelope, SearchError, SearchRequest, SearchScope,
    build_search_url,
};

/// Client for the archive search API.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    http: reqwest::Client,
    api_base: String,
}

impl ArchiveClient {
    /// Create a client for the archive hosted at `api_base` (scheme and host, no path).
    pub fn new(api_base: impl Into<String>) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let api_base = api_base.into().trim_end_matches('/').to_string();
        Ok(Self { http, api_base })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Validate `request` and build its URL for `scope`.
    pub fn search_url(
        &self,
        scope: SearchScope,
        request: &SearchRequest,
    ) -> Result<String, SearchError> {
        request.validate()?;
        Ok(build_search_url(
            &scope.endpoint(&self.api_base),
            &request.query_term,
            request.start_date(),
            request.end_date(),
        ))
    }

    /// Run one search. Invalid date bounds are rejected without touching the network.
    pub async fn search(
        &self,
        scope: SearchScope,
        request: &SearchRequest,
    ) -> Result<Vec<NormalizedResultRecord>, SearchError> {
        let url = self.search_url(scope, request)?;
        self.fetch_and_normalize(&url).await
    }

    /// GET `url` and project the `data` list of the JSON body.
    ///
    /// A body without `data` yields an empty list, whatever the HTTP status.
    pub async fn fetch_and_normalize(
        &self,
        url: &str,
    ) -> Result<Vec<NormalizedResultRecord>, SearchError> {
        let transport = |source: reqwest::Error| SearchError::transport(url, source);

        log::debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(transport)?;

        // Error statuses still go through the body parse; an error document without
        // `data` is an empty result, a non-JSON page is a format error.
        let status = response.status();
        if !status.is_success() {
            log::warn!("{url} answered {status}");
        }

        let body = response.bytes().await.map_err(transport)?;

        let envelope: SearchEnvelope =
            serde_json::from_slice(&body).map_err(|source| SearchError::ResponseFormat {
                url: url.to_string(),
                source,
            })?;

        let records = envelope.into_records();
        log::debug!("{} results from {url}", records.len());
        Ok(records)
    }
}
