use serde::{Deserialize, Serialize};

/// Why a provider request failed before an answer could be read.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not decode weather provider response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("weather provider response is missing `{0}`")]
    MissingField(&'static str),
}

/// The two failures a search can surface on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum SearchError {
    #[error("City not found")]
    NotFound,
    #[error("Error fetching weather")]
    FetchFailure,
}

impl From<&FetchError> for SearchError {
    fn from(_: &FetchError) -> Self {
        SearchError::FetchFailure
    }
}
