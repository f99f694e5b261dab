use thiserror::Error;

/// Failure modes of the search pipeline.
///
/// A missing query and a query with no matches are ordinary rendered
/// outcomes, not errors; the only runtime failure is a term whose
/// literal-pattern interpretation does not compile.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search term is interpolated into the match pattern verbatim,
    /// so a term like `(` has no valid pattern interpretation.
    #[error("search term {term:?} is not a usable match pattern: {source}")]
    InvalidPattern {
        term: String,
        #[source]
        source: regex::Error,
    },
}

impl SearchError {
    pub(crate) fn invalid_pattern(term: &str, source: regex::Error) -> Self {
        SearchError::InvalidPattern { term: term.to_string(), source }
    }
}
