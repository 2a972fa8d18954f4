use thiserror::Error;

pub type Result<T> = std::result::Result<T, StigError>;

#[derive(Error, Debug)]
pub enum StigError {
    #[error("HTTP request {status} {reason}")]
    Http { status: u16, reason: String },

    #[error("filter '{0}' is invalid\nexpected 'key:value[ key:value]...'")]
    InvalidFilter(String),

    #[error("query string is empty")]
    EmptyQuery,

    #[error("repo path '{0}' is invalid")]
    InvalidRepoPath(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StigError {
    /// The single message shown on stderr when a run fails.
    pub fn user_message(&self) -> String {
        format!("Error: {self}\nview the help output with '-h'")
    }
}
