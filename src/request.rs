//! Request building and dispatch.
//!
//! Every call accumulates an ordered parameter list, then goes out either
//! as a GET with a query string or as a gzip-compressed form POST. The URL
//! is assembled by hand with `urlencoding` so the encoding of repeated and
//! indexed keys stays under our control rather than the transport's.
//!
//! The application API key, when present, is seeded into the list as the
//! `client` parameter before any call-specific parameters; every action
//! carries it, including the keyless ones.

use reqwest::header::{CONTENT_ENCODING, CONTENT_TYPE};
use tracing::{debug, trace};

use crate::compress::Compressor;
use crate::error::{Error, Result};
use crate::meta::Meta;
use crate::response;

/// Remote actions exposed by the v2 API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Lookup,
    Submit,
    SubmissionStatus,
    TracklistByMbid,
}

impl Action {
    /// Path segment below the API base URL.
    pub(crate) fn path(self) -> &'static str {
        match self {
            Action::Lookup => "lookup",
            Action::Submit => "submit",
            Action::SubmissionStatus => "submission_status",
            Action::TracklistByMbid => "tracklist_by_mbid",
        }
    }
}

/// Ordered, repeatable parameter list for one call.
///
/// Later additions append; existing pairs are never replaced. Repeated keys
/// are legal and preserved in insertion order (meta flags, batched MBIDs,
/// indexed submission fields).
#[derive(Debug, Clone, Default)]
pub(crate) struct Params(Vec<(String, String)>);

impl Params {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    /// Append one pair.
    pub(crate) fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.push((key.into(), value.to_string()));
    }

    /// Form/query encoding, preserving insertion order and repeats.
    pub(crate) fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    #[cfg(test)]
    pub(crate) fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

/// One in-flight API call: accumulated parameters plus transport handles.
pub(crate) struct ApiRequest<'a> {
    http: &'a reqwest::Client,
    base_url: &'a str,
    params: Params,
}

impl<'a> ApiRequest<'a> {
    pub(crate) fn new(
        http: &'a reqwest::Client,
        base_url: &'a str,
        api_key: Option<&str>,
    ) -> Self {
        let mut params = Params::new();
        if let Some(key) = api_key {
            params.push("client", key);
        }
        Self {
            http,
            base_url,
            params,
        }
    }

    /// Append one parameter, chainable.
    pub(crate) fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push(key, value);
        self
    }

    /// Append every flag as its own `meta` pair.
    pub(crate) fn meta(mut self, meta: &[Meta]) -> Self {
        for flag in meta {
            self.params.push("meta", flag);
        }
        self
    }

    /// Run the accumulated parameters through `f`, chainable.
    ///
    /// Used for bulk additions such as flattened submission batches.
    pub(crate) fn with_params(mut self, f: impl FnOnce(Params) -> Params) -> Self {
        self.params = f(self.params);
        self
    }

    /// Issue a GET with the parameters as a query string, returning the raw
    /// body.
    pub(crate) async fn send_get(self, action: Action) -> Result<String> {
        let url = format!(
            "{}/{}?{}",
            self.base_url,
            action.path(),
            self.params.encode()
        );
        trace!(target: "acoustid", "GET {}", url);

        let response = self.http.get(&url).send().await?;
        read_body(response).await
    }

    /// Issue a POST with the parameters as a compressed form body, returning
    /// the raw body.
    pub(crate) async fn send_compressed_post(
        self,
        compressor: &dyn Compressor,
        action: Action,
    ) -> Result<String> {
        let url = format!("{}/{}", self.base_url, action.path());
        let body = self.params.encode();
        let compressed = compressor.compress(body.as_bytes())?;
        trace!(
            target: "acoustid",
            "POST {} ({} bytes, {})",
            url,
            compressed.len(),
            compressor.encoding()
        );

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(CONTENT_ENCODING, compressor.encoding())
            .body(compressed)
            .send()
            .await?;
        read_body(response).await
    }

    #[cfg(test)]
    pub(crate) fn params(&self) -> &Params {
        &self.params
    }
}

/// Drain the response, mapping non-2xx statuses to domain errors.
///
/// The service reports rejections as JSON error envelopes over 4xx
/// statuses; those take precedence over the bare HTTP error.
async fn read_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    debug!(target: "acoustid", "response status: {}", status);

    let body = response.text().await?;

    if !status.is_success() {
        if let Some(err) = response::service_error(&body) {
            return Err(err);
        }
        return Err(Error::Http {
            status: status.as_u16(),
            message: format!(
                "{} - {}",
                status.canonical_reason().unwrap_or("Unknown"),
                body.chars().take(200).collect::<String>()
            ),
        });
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_paths() {
        assert_eq!(Action::Lookup.path(), "lookup");
        assert_eq!(Action::Submit.path(), "submit");
        assert_eq!(Action::SubmissionStatus.path(), "submission_status");
        assert_eq!(Action::TracklistByMbid.path(), "tracklist_by_mbid");
    }

    #[test]
    fn test_encode_preserves_order_and_repeats() {
        let mut params = Params::new();
        params.push("trackid", "abc");
        params.push("meta", "recordings");
        params.push("meta", "releases");
        params.push("format", "json");

        assert_eq!(
            params.encode(),
            "trackid=abc&meta=recordings&meta=releases&format=json"
        );
    }

    #[test]
    fn test_encode_escapes_keys_and_values() {
        let mut params = Params::new();
        params.push("fingerprint[0]", "a b+c");

        assert_eq!(params.encode(), "fingerprint%5B0%5D=a%20b%2Bc");
    }

    #[test]
    fn test_api_key_is_seeded_first() {
        let http = reqwest::Client::new();
        let request = ApiRequest::new(&http, "http://localhost", Some("secret"))
            .param("trackid", "abc");

        let pairs = request.params().clone().into_pairs();
        assert_eq!(pairs[0], ("client".to_string(), "secret".to_string()));
        assert_eq!(pairs[1], ("trackid".to_string(), "abc".to_string()));
    }

    #[test]
    fn test_no_client_param_without_key() {
        let http = reqwest::Client::new();
        let request = ApiRequest::new(&http, "http://localhost", None).param("mbid", "xyz");

        let pairs = request.params().clone().into_pairs();
        assert!(!pairs.iter().any(|(k, _)| k == "client"));
    }
}
