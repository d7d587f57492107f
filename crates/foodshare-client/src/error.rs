//! Error types for backend calls.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while talking to the backend.
///
/// None of them are retried; callers decide what to show.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The configured base URL cannot be parsed or joined.
    #[error("invalid API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Request could not be sent or the body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body is not the JSON shape expected for the endpoint.
    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// An image to upload has no file behind it.
    #[error("image {name} has no file to upload")]
    MissingImageSource { name: String },

    /// An image file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// Short message suitable for end users.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "No se pudo conectar con el servidor.",
            Self::Status { .. } | Self::Decode { .. } => "El servidor respondió con un error.",
            Self::MissingImageSource { .. } | Self::Io { .. } => {
                "No se pudo leer una de las imágenes."
            }
            Self::InvalidUrl { .. } => "La dirección del servidor no es válida.",
        }
    }
}

/// Result type for backend calls.
pub type Result<T> = std::result::Result<T, ApiError>;
