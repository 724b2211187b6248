/// Error types for the AniList client
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AniListError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL error: {0}")]
    Graphql(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl AniListError {
    /// True when the request never produced a usable upstream answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, AniListError::Transport(_) | AniListError::Status { .. })
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, AniListError>;
