use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("No cached results for query: {0:?}")]
    UnknownKey(String),
}

pub type Result<T> = std::result::Result<T, SiftError>;
