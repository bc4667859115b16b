use thiserror::Error;

/// Errors that can occur while searching for cocktails
#[derive(Error, Debug)]
pub enum SearchError {
    /// Failed to reach the search endpoint
    #[error("Failed to fetch search results: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The search endpoint answered with a non-success status
    #[error("Search request failed with HTTP status {0}")]
    HttpStatus(u16),

    /// The response body was not the expected JSON shape
    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No ingredients left after trimming the input
    #[error("No ingredients provided")]
    EmptyQuery,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
