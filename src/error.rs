//! Client error types.
//!
//! Every failure surfaces to the direct caller as an [`Error`]; no layer
//! retries, recovers, or substitutes defaults. The variants keep the three
//! failure origins distinguishable: the precondition check, the transport,
//! and the service itself.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the AcoustID client.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation requires an application API key but the client holds none.
    #[error("an API key is required for this operation")]
    MissingApiKey,

    /// Transport-level failure: connection, TLS, or reading the body.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response whose body did not carry a service error payload.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The service understood the request but rejected it.
    ///
    /// Code and message are the service's own, e.g. code 4 for an invalid
    /// fingerprint.
    #[error("service error {code}: {message}")]
    Service { code: i32, message: String },

    /// The response body is not valid JSON or does not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Local I/O failure while preparing a request body.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
