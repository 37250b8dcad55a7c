//! Response processing.
//!
//! The service wraps every body in a status envelope; rejections come back
//! in-band as `{"status": "error", "error": {"code": .., "message": ..}}`,
//! sometimes over a 4xx status. The processor extracts that envelope before
//! deserializing the typed container, so callers see a service error rather
//! than a shape mismatch.

use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Wire format of a response body.
///
/// Only JSON is exercised by the v2 API today; the enum keeps the format an
/// explicit parameter of every call and renders the wire `format` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
}

impl ResponseFormat {
    /// Wire value of the `format` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: i32,
    message: String,
}

/// Extract a service-reported error from a body, if one is present.
pub(crate) fn service_error(body: &str) -> Option<Error> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    let error = envelope.error?;
    Some(Error::Service {
        code: error.code,
        message: error.message,
    })
}

/// Deserialize a raw response body into a typed container.
///
/// A service error envelope takes precedence over the target shape; any
/// other parse failure is a malformed response.
pub(crate) fn process<T: DeserializeOwned>(body: &str, format: ResponseFormat) -> Result<T> {
    match format {
        ResponseFormat::Json => {
            if let Some(err) = service_error(body) {
                return Err(err);
            }
            serde_json::from_str(body).map_err(|e| Error::Malformed(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::ResultCollection;

    #[test]
    fn test_service_error_extracted() {
        let body = r#"{"status":"error","error":{"code":4,"message":"invalid fingerprint"}}"#;

        let err = service_error(body).unwrap();
        assert!(matches!(
            err,
            Error::Service { code: 4, ref message } if message == "invalid fingerprint"
        ));
    }

    #[test]
    fn test_service_error_without_code_defaults_to_zero() {
        let body = r#"{"status":"error","error":{"message":"unknown format"}}"#;

        let err = service_error(body).unwrap();
        assert!(matches!(err, Error::Service { code: 0, .. }));
    }

    #[test]
    fn test_ok_body_is_not_a_service_error() {
        assert!(service_error(r#"{"status":"ok","results":[]}"#).is_none());
        assert!(service_error("not json at all").is_none());
    }

    #[test]
    fn test_process_returns_typed_container() {
        let body = r#"{"status":"ok","results":[{"id":"abc","score":0.9}]}"#;

        let collection: ResultCollection = process(body, ResponseFormat::Json).unwrap();
        assert_eq!(collection.results.len(), 1);
        assert_eq!(collection.results[0].id, "abc");
    }

    #[test]
    fn test_process_prefers_service_error_over_shape() {
        let body = r#"{"status":"error","error":{"code":6,"message":"invalid user API key"}}"#;

        let result: Result<ResultCollection> = process(body, ResponseFormat::Json);
        assert!(matches!(result, Err(Error::Service { code: 6, .. })));
    }

    #[test]
    fn test_process_rejects_malformed_bodies() {
        let result: Result<ResultCollection> = process("<html>503</html>", ResponseFormat::Json);
        assert!(matches!(result, Err(Error::Malformed(_))));

        // Valid JSON, wrong shape: results must be an array.
        let result: Result<ResultCollection> =
            process(r#"{"status":"ok","results":42}"#, ResponseFormat::Json);
        assert!(matches!(result, Err(Error::Malformed(_))));
    }

    #[test]
    fn test_format_wire_value() {
        assert_eq!(ResponseFormat::Json.as_str(), "json");
        assert_eq!(ResponseFormat::Json.to_string(), "json");
    }
}
