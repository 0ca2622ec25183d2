use std::time::Duration;

use thiserror::Error;

/// Failures reported by a catalog search backend.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("request timed out")]
    TimedOut,

    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

/// Failures of a single recommendation request. None of them end the session.
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("empty query")]
    EmptyQuery,

    #[error("catalog search timed out after {0:?}")]
    Timeout(Duration),

    #[error("catalog search failed: {0}")]
    Search(#[source] anyhow::Error),
}

impl RecommendError {
    /// Text shown to the user in the chat transcript.
    pub fn user_message(&self) -> &'static str {
        match self {
            RecommendError::EmptyQuery => "Please enter a query.",
            RecommendError::Timeout(_) => "The request timed out. Please try again.",
            RecommendError::Search(_) => "Something went wrong talking to Spotify. Please try again.",
        }
    }
}
