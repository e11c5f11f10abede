//! Error types for the REST client and the fixture loader.
//!
//! # Design
//! A 4xx/5xx answer is not an error here: the exchange succeeded and the
//! caller inspects `Response::status_code`. Only failures that leave the
//! caller without a usable response end up in `ClientError`, each tagged with
//! the method and URL that was attempted.

use std::path::PathBuf;

use thiserror::Error;

use crate::http::HttpMethod;

/// Boxed error produced by a `Transport` implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `RestClient` operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout,
    /// broken body stream).
    #[error("{method} request failed for {url}")]
    Transport {
        method: HttpMethod,
        url: String,
        #[source]
        source: TransportError,
    },

    /// The request payload could not be serialized to JSON.
    #[error("could not serialize {method} body for {url}")]
    Serialization {
        method: HttpMethod,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response body did not match the requested type.
    #[error("could not deserialize {method} response from {url}")]
    Deserialization {
        method: HttpMethod,
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn method(&self) -> HttpMethod {
        match self {
            ClientError::Transport { method, .. }
            | ClientError::Serialization { method, .. }
            | ClientError::Deserialization { method, .. } => *method,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ClientError::Transport { url, .. }
            | ClientError::Serialization { url, .. }
            | ClientError::Deserialization { url, .. } => url,
        }
    }
}

/// Errors raised while loading fixture files.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("cannot read fixture {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fixture {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
