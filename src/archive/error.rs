use std::error::Error as _;

use thiserror::Error;

/// Failure of a single search invocation.
///
/// A well-formed response without matches is not an error; it yields an empty list.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Rejected before any network call.
    #[error("{0}")]
    InvalidArgument(String),

    /// The request could not be completed (DNS, refused connection, timeout, broken body).
    ///
    /// `detail` holds the whole cause chain; reqwest's own `Display` stops at the top level.
    #[error("API request failed: {detail}")]
    Transport {
        url: String,
        detail: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not JSON or did not have the expected structure.
    #[error("Failed to parse API response: {source}")]
    ResponseFormat {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SearchError {
    pub fn invalid_date(field: &str) -> Self {
        Self::InvalidArgument(format!("{field} must be in YYYY-MM-DD format"))
    }

    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        let mut detail = source.to_string();
        let mut cause = source.source();
        while let Some(err) = cause {
            let text = err.to_string();
            // hyper and the OS error often repeat the same text
            if !detail.ends_with(&text) {
                detail.push_str(": ");
                detail.push_str(&text);
            }
            cause = err.source();
        }

        Self::Transport {
            url: url.to_string(),
            detail,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn transport_message_includes_the_socket_cause() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .unwrap();
        let url = format!("http://{addr}/");
        let source = reqwest::get(&url).await.unwrap_err();

        let err = SearchError::transport(&url, source);
        let message = err.to_string();
        assert!(message.starts_with("API request failed: error sending request"), "{message}");
        assert!(message.to_lowercase().contains("refused"), "{message}");
    }
}
