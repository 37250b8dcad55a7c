//! Response containers for the AcoustID web service.
//!
//! These types match EXACTLY what the API returns; they are constructed
//! fresh per call and never cached or mutated. Optional sections only
//! appear when the corresponding meta flag was requested, so every nested
//! array defaults to empty.
//!
//! API reference: https://acoustid.org/webservice
//!
//! Example lookup response:
//! ```json
//! {
//!   "status": "ok",
//!   "results": [{
//!     "id": "abcd1234",
//!     "score": 0.95,
//!     "recordings": [{
//!       "id": "recording-mbid",
//!       "title": "Song Title",
//!       "duration": 180,
//!       "artists": [{"id": "artist-mbid", "name": "Artist Name"}],
//!       "releases": [{"id": "release-mbid", "title": "Album"}]
//!     }]
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Fingerprint or track-id lookup response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultCollection {
    pub status: String,
    #[serde(default)]
    pub results: Vec<LookupResult>,
}

/// A single fingerprint match.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupResult {
    /// AcoustID track identifier.
    pub id: String,
    /// Match confidence (0.0 to 1.0).
    pub score: f32,
    /// MusicBrainz recordings, when `meta=recordings` was requested.
    #[serde(default)]
    pub recordings: Vec<Recording>,
}

/// MusicBrainz recording attached to a match.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recording {
    /// MusicBrainz recording id.
    pub id: String,
    pub title: Option<String>,
    /// Duration in seconds; the API returns a float, e.g. 353.0.
    pub duration: Option<f64>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub releases: Vec<Release>,
    #[serde(default)]
    pub releasegroups: Vec<ReleaseGroup>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    /// MusicBrainz artist id.
    pub id: String,
    pub name: String,
}

/// Release (album) a recording appears on.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Release {
    /// MusicBrainz release id.
    pub id: String,
    pub title: Option<String>,
    pub country: Option<String>,
    pub mediums: Option<Vec<Medium>>,
}

/// Release group, when `meta=releasegroups` was requested.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReleaseGroup {
    /// MusicBrainz release group id.
    pub id: String,
    pub title: Option<String>,
    /// Primary type: Album, Single, EP, …
    #[serde(rename = "type")]
    pub release_type: Option<String>,
    /// Secondary types: Compilation, Live, Soundtrack, …
    #[serde(default)]
    pub secondarytypes: Vec<String>,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// Medium (disc) within a release.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Medium {
    pub position: Option<u32>,
    pub track_count: Option<u32>,
    pub tracks: Option<Vec<MediumTrack>>,
}

/// Track position within a medium.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediumTrack {
    pub position: Option<u32>,
}

/// Response to a fingerprint submission or a status poll.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmissionCollection {
    pub status: String,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

/// One queued fingerprint submission.
///
/// Submissions import asynchronously; `status` stays "pending" until the
/// service has processed the fingerprint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Submission {
    /// Submission id, usable with the status endpoint.
    pub id: u64,
    /// "pending" or "imported".
    pub status: String,
    /// The track the fingerprint was matched to, once imported.
    pub result: Option<Track>,
}

/// Track list for a single MusicBrainz recording id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackCollection {
    pub status: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// AcoustID track reference.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    /// AcoustID track identifier.
    pub id: String,
}

/// Batched track lists, one entry per requested MBID.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MbidCollection {
    pub status: String,
    #[serde(default)]
    pub mbids: Vec<MbidTracks>,
}

/// Track list for one MBID within a batch response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MbidTracks {
    pub mbid: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our containers match what the real API returns. If these
// fail, the API has changed and the shapes need updating.
// ============================================================================
