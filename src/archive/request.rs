use super::{SearchError, is_valid_date};

/// One search against the archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query_term: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl SearchRequest {
    pub fn new(query_term: impl Into<String>) -> Self {
        Self {
            query_term: query_term.into(),
            ..Self::default()
        }
    }

    pub fn with_start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn with_end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    /// Lower bound, if one was given. An empty string counts as no bound.
    pub fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref().filter(|d| !d.is_empty())
    }

    /// Upper bound, if one was given. An empty string counts as no bound.
    pub fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref().filter(|d| !d.is_empty())
    }

    /// Reject malformed date bounds. Start is checked before end.
    pub fn validate(&self) -> Result<(), SearchError> {
        if let Some(start) = self.start_date()
            && !is_valid_date(start)
        {
            return Err(SearchError::invalid_date("start_date"));
        }
        if let Some(end) = self.end_date()
            && !is_valid_date(end)
        {
            return Err(SearchError::invalid_date("end_date"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_bounds_is_valid() {
        assert!(SearchRequest::new("fjell").validate().is_ok());
    }

    #[test]
    fn empty_bounds_are_ignored() {
        let request = SearchRequest::new("fjell").with_start_date("").with_end_date("");
        assert!(request.validate().is_ok());
        assert_eq!(request.start_date(), None);
        assert_eq!(request.end_date(), None);
    }

    #[test]
    fn bad_start_date_names_field() {
        let err = SearchRequest::new("fjell")
            .with_start_date("2020-13-01")
            .validate()
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "start_date must be in YYYY-MM-DD format");
    }

    #[test]
    fn bad_end_date_names_field() {
        let err = SearchRequest::new("fjell")
            .with_start_date("2020-01-01")
            .with_end_date("31.12.2020")
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "end_date must be in YYYY-MM-DD format");
    }

    #[test]
    fn start_is_reported_first() {
        let err = SearchRequest::new("fjell")
            .with_start_date("x")
            .with_end_date("y")
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "start_date must be in YYYY-MM-DD format");
    }
}
