//! Client for the AcoustID fingerprint-matching web service.
//!
//! [AcoustID](https://acoustid.org/webservice) identifies audio recordings
//! by Chromaprint fingerprint. This crate wraps the v2 endpoints behind a
//! typed async client: fingerprint and track-id lookup, fingerprint
//! submission, submission status, and MBID track listing.
//!
//! # Example
//!
//! ```no_run
//! use acoustid_client::{AcoustidClient, Fingerprint, Meta};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AcoustidClient::new("your-app-api-key")?;
//! let fingerprint = Fingerprint::new("AQADtEmi3k9Mns1P...", 231);
//!
//! let matches = client
//!     .lookup_by_fingerprint(&fingerprint, &[Meta::Recordings, Meta::Releases])
//!     .await?;
//! for result in &matches.results {
//!     println!("{} (score {:.2})", result.id, result.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Lookups and submissions need an application API key; listing tracks by
//! MusicBrainz id does not. Errors keep the service's own error code and
//! message where it reported one, see [`Error`].

pub mod client;
mod compress;
pub mod dto;
pub mod error;
pub mod fingerprint;
pub mod meta;
mod request;
mod response;


pub use client::{AcoustidClient, AcoustidClientBuilder, SubmitOptions};
pub use dto::{MbidCollection, ResultCollection, SubmissionCollection, TrackCollection};
pub use error::{Error, Result};
pub use fingerprint::{Fingerprint, FingerprintBatch, SubmissionEntry};
pub use meta::Meta;
pub use response::ResponseFormat;
