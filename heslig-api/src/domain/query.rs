use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Search term must not be empty")]
    EmptyTerm,
}

/// A normalized search request: the cleaned-up term plus the page offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    offset: i64,
}

impl SearchQuery {
    /// Normalizes raw query input. The term is trimmed and lowercased and
    /// must not end up empty. A missing or unparsable offset becomes zero;
    /// negative offsets pass through and get rejected by the search backend.
    pub fn normalize(term: &str, offset: Option<&str>) -> Result<Self, ValidationError> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Err(ValidationError::EmptyTerm);
        }

        let offset = offset.and_then(|raw| raw.trim().parse::<i64>().ok()).unwrap_or(0);

        Ok(Self { term, offset })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases_term() {
        let query = SearchQuery::normalize("  KaTzE \t", None).unwrap();
        assert_eq!(query.term(), "katze");
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn rejects_empty_and_whitespace_terms() {
        assert_eq!(
            SearchQuery::normalize("", None),
            Err(ValidationError::EmptyTerm)
        );
        assert_eq!(
            SearchQuery::normalize("   \t\n", None),
            Err(ValidationError::EmptyTerm)
        );
    }

    #[test]
    fn parses_offset_and_defaults_to_zero() {
        let query = SearchQuery::normalize("katze", Some("40")).unwrap();
        assert_eq!(query.offset(), 40);

        let query = SearchQuery::normalize("katze", Some("quark")).unwrap();
        assert_eq!(query.offset(), 0);

        let query = SearchQuery::normalize("katze", None).unwrap();
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn negative_offsets_pass_through() {
        let query = SearchQuery::normalize("katze", Some("-20")).unwrap();
        assert_eq!(query.offset(), -20);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = SearchQuery::normalize("  Gedämpfte Huscheln ", Some("20")).unwrap();
        let twice = SearchQuery::normalize(once.term(), Some("20")).unwrap();
        assert_eq!(once, twice);
    }
}
