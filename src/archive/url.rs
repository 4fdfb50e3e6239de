//! Request URL construction for the transcription search endpoint.

/// Build the full search URL for `query_term`.
///
/// `base_endpoint` must end with the term parameter key (`...?s=` or `...&s=`), see
/// [`SearchScope::endpoint`](super::SearchScope::endpoint). Dates are appended verbatim and must
/// already have passed [`is_valid_date`](super::is_valid_date).
pub fn build_search_url(
    base_endpoint: &str,
    query_term: &str,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> String {
    let mut url = format!("{base_endpoint}{}", urlencoding::encode(query_term));

    if let Some(start) = start_date {
        url.push_str("&date_from=");
        url.push_str(start);
    }
    if let Some(end) = end_date {
        url.push_str("&date_to=");
        url.push_str(end);
    }

    url
}
