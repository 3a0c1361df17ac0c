use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Anything that can go wrong while fetching the checkpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("reading the response body from '{url}' failed: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{url}' answered with {status}")]
    Status { url: String, status: StatusCode },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub(crate) fn request(url: &str, source: reqwest::Error) -> Self {
        FetchError::Request {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
