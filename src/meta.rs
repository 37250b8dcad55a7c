//! Meta flags for lookup requests.
//!
//! The service keeps lookup responses minimal by default; each optional
//! section (recordings, releases, …) is only included when requested via
//! the repeatable `meta` parameter. The variants cover the vocabulary of
//! the v2 API.

use std::fmt;

/// Optional response sections a lookup may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meta {
    /// MusicBrainz recordings matched to each result.
    Recordings,
    /// Recording ids only, without titles or artists.
    RecordingIds,
    /// Releases the matched recordings appear on.
    Releases,
    /// Release ids only.
    ReleaseIds,
    /// Release groups (album groupings).
    ReleaseGroups,
    /// Release group ids only.
    ReleaseGroupIds,
    /// Track positions within releases.
    Tracks,
    /// Ask the service to compact repeated sections in the response.
    Compress,
    /// User-submitted metadata attached to unmatched fingerprints.
    UserMeta,
    /// Submission sources per result.
    Sources,
}

impl Meta {
    /// Wire spelling of the flag.
    pub fn as_str(self) -> &'static str {
        match self {
            Meta::Recordings => "recordings",
            Meta::RecordingIds => "recordingids",
            Meta::Releases => "releases",
            Meta::ReleaseIds => "releaseids",
            Meta::ReleaseGroups => "releasegroups",
            Meta::ReleaseGroupIds => "releasegroupids",
            Meta::Tracks => "tracks",
            Meta::Compress => "compress",
            Meta::UserMeta => "usermeta",
            Meta::Sources => "sources",
        }
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
