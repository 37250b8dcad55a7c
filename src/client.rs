//! AcoustID API client.
//!
//! Handles communication with the AcoustID web service.
//! See: https://acoustid.org/webservice
//!
//! Two kinds of key are involved: the *application* API key this client is
//! configured with (sent as the `client` parameter on every call), and the
//! *user* API key passed per submission. Lookups and submissions require the
//! application key; track listing by MBID works without one.
//!
//! The client holds its configuration immutably; [`AcoustidClient::with_api_key`]
//! returns a reconfigured copy instead of mutating shared state. Use one
//! client per credential when callers need isolation.

use std::time::Duration;

use crate::compress::GzipCompressor;
use crate::dto::{MbidCollection, ResultCollection, SubmissionCollection, TrackCollection};
use crate::error::{Error, Result};
use crate::fingerprint::{Fingerprint, FingerprintBatch};
use crate::meta::Meta;
use crate::request::{Action, ApiRequest};
use crate::response::{self, ResponseFormat};

const API_BASE_URL: &str = "https://api.acoustid.org/v2";

/// Response format requested from the service on read-style calls.
const FORMAT: ResponseFormat = ResponseFormat::Json;

/// `clientversion` reported when the caller does not supply one.
const DEFAULT_CLIENT_VERSION: &str = "1.0";

/// Options for fingerprint submission.
#[derive(Debug, Clone)]
pub struct SubmitOptions {
    /// Version string reported as `clientversion`.
    pub client_version: String,
    /// Seconds the service may block waiting for the import to finish
    /// before answering with a pending status.
    pub wait: u32,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            client_version: DEFAULT_CLIENT_VERSION.to_string(),
            wait: 1,
        }
    }
}

/// AcoustID API client.
#[derive(Debug, Clone)]
pub struct AcoustidClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl AcoustidClient {
    /// Create a client with an application API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> AcoustidClientBuilder {
        AcoustidClientBuilder::default()
    }

    /// Copy of this client that uses `api_key` for subsequent calls.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The configured application API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn require_api_key(&self) -> Result<()> {
        if self.api_key.is_none() {
            return Err(Error::MissingApiKey);
        }
        Ok(())
    }

    fn request(&self) -> ApiRequest<'_> {
        ApiRequest::new(&self.http, &self.base_url, self.api_key.as_deref())
    }

    /// Look up matches for an audio fingerprint.
    ///
    /// Requires an API key. Fingerprints run to several kilobytes, so the
    /// request goes out as a gzip-compressed POST.
    pub async fn lookup_by_fingerprint(
        &self,
        fingerprint: &Fingerprint,
        meta: &[Meta],
    ) -> Result<ResultCollection> {
        self.require_api_key()?;
        let body = self
            .request()
            .param("fingerprint", fingerprint.fingerprint())
            .param("duration", fingerprint.duration_secs())
            .meta(meta)
            .param("format", FORMAT)
            .send_compressed_post(&GzipCompressor, Action::Lookup)
            .await?;

        response::process(&body, FORMAT)
    }

    /// Look up a known track by its AcoustID track id.
    ///
    /// Requires an API key.
    pub async fn lookup_by_track_id(
        &self,
        track_id: &str,
        meta: &[Meta],
    ) -> Result<ResultCollection> {
        self.require_api_key()?;
        let body = self
            .request()
            .param("trackid", track_id)
            .meta(meta)
            .param("format", FORMAT)
            .send_get(Action::Lookup)
            .await?;

        response::process(&body, FORMAT)
    }

    /// Submit fingerprints for ingestion, using default [`SubmitOptions`].
    pub async fn submit(
        &self,
        fingerprints: &FingerprintBatch,
        user_api_key: &str,
    ) -> Result<SubmissionCollection> {
        self.submit_with_options(fingerprints, user_api_key, &SubmitOptions::default())
            .await
    }

    /// Submit fingerprints for ingestion.
    ///
    /// `user_api_key` is the submitting end user's key, distinct from the
    /// application key this client holds. Imports happen asynchronously;
    /// poll [`AcoustidClient::submission_status`] with the returned
    /// submission ids to observe progress.
    pub async fn submit_with_options(
        &self,
        fingerprints: &FingerprintBatch,
        user_api_key: &str,
        options: &SubmitOptions,
    ) -> Result<SubmissionCollection> {
        self.require_api_key()?;
        let body = self
            .request()
            .param("user", user_api_key)
            .param("clientversion", &options.client_version)
            .param("wait", options.wait)
            .with_params(|params| fingerprints.append_params(params))
            .send_compressed_post(&GzipCompressor, Action::Submit)
            .await?;

        response::process(&body, FORMAT)
    }

    /// Check the status of an earlier submission.
    ///
    /// Requires an API key.
    pub async fn submission_status(&self, submission_id: u64) -> Result<SubmissionCollection> {
        self.submission_status_with_version(submission_id, DEFAULT_CLIENT_VERSION)
            .await
    }

    /// Check the status of an earlier submission, reporting `client_version`.
    pub async fn submission_status_with_version(
        &self,
        submission_id: u64,
        client_version: &str,
    ) -> Result<SubmissionCollection> {
        self.require_api_key()?;
        let body = self
            .request()
            .param("id", submission_id)
            .param("clientversion", client_version)
            .param("format", FORMAT)
            .send_get(Action::SubmissionStatus)
            .await?;

        response::process(&body, FORMAT)
    }

    /// List the AcoustID tracks associated with a MusicBrainz recording id.
    ///
    /// Works without an API key.
    pub async fn tracks_by_mbid(&self, mbid: &str) -> Result<TrackCollection> {
        let body = self
            .request()
            .param("mbid", mbid)
            .param("batch", 0)
            .param("format", FORMAT)
            .send_get(Action::TracklistByMbid)
            .await?;

        response::process(&body, FORMAT)
    }

    /// List tracks for several MusicBrainz recording ids in one batch call.
    ///
    /// Works without an API key. The response groups tracks per MBID.
    pub async fn tracks_by_mbids(&self, mbids: &[&str]) -> Result<MbidCollection> {
        let mut request = self.request();
        for mbid in mbids {
            request = request.param("mbid", *mbid);
        }
        let body = request
            .param("batch", 1)
            .param("format", FORMAT)
            .send_get(Action::TracklistByMbid)
            .await?;

        response::process(&body, FORMAT)
    }
}

/// Builder for configuring an [`AcoustidClient`].
#[derive(Debug)]
pub struct AcoustidClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl Default for AcoustidClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl AcoustidClientBuilder {
    /// Set the application API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// The underlying HTTP client accepts gzip-compressed responses and
    /// sends a User-Agent identifying this crate.
    pub fn build(self) -> Result<AcoustidClient> {
        let http = reqwest::Client::builder()
            .gzip(true)
            .timeout(self.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(AcoustidClient {
            http,
            base_url: self.base_url,
            api_key: self.api_key,
        })
    }
}
