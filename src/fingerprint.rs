//! Fingerprint value objects and submission batches.
//!
//! A [`Fingerprint`] pairs a Chromaprint string with the duration of the
//! audio it was computed from; the service needs both to match. For
//! submission, each fingerprint may carry extra metadata the service stores
//! alongside the new association, and a whole batch is flattened into
//! indexed form parameters (`fingerprint[0]`, `duration[0]`, …) before
//! transmission.

use crate::request::Params;

/// Chromaprint fingerprint plus the duration of the fingerprinted audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    fingerprint: String,
    duration_secs: u32,
}

impl Fingerprint {
    /// Create a fingerprint value.
    pub fn new(fingerprint: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            duration_secs,
        }
    }

    /// The fingerprint string.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Audio duration in seconds.
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }
}

/// One fingerprint plus the optional metadata the service accepts on
/// submission.
///
/// All metadata is optional; unset fields are simply omitted from the
/// request.
#[derive(Debug, Clone)]
pub struct SubmissionEntry {
    fingerprint: Fingerprint,
    mbid: Option<String>,
    track: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    album_artist: Option<String>,
    year: Option<u16>,
    track_no: Option<u32>,
    disc_no: Option<u32>,
    bitrate: Option<u32>,
    file_format: Option<String>,
}

impl SubmissionEntry {
    /// Create an entry with no metadata.
    pub fn new(fingerprint: Fingerprint) -> Self {
        Self {
            fingerprint,
            mbid: None,
            track: None,
            artist: None,
            album: None,
            album_artist: None,
            year: None,
            track_no: None,
            disc_no: None,
            bitrate: None,
            file_format: None,
        }
    }

    /// MusicBrainz recording id to associate with the fingerprint.
    pub fn mbid(mut self, mbid: impl Into<String>) -> Self {
        self.mbid = Some(mbid.into());
        self
    }

    /// Track title.
    pub fn track(mut self, track: impl Into<String>) -> Self {
        self.track = Some(track.into());
        self
    }

    /// Artist name.
    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Album title.
    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Album artist, when it differs from the track artist.
    pub fn album_artist(mut self, album_artist: impl Into<String>) -> Self {
        self.album_artist = Some(album_artist.into());
        self
    }

    /// Release year.
    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    /// Track number on the album.
    pub fn track_no(mut self, track_no: u32) -> Self {
        self.track_no = Some(track_no);
        self
    }

    /// Disc number.
    pub fn disc_no(mut self, disc_no: u32) -> Self {
        self.disc_no = Some(disc_no);
        self
    }

    /// Audio bitrate in kbit/s.
    pub fn bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = Some(bitrate);
        self
    }

    /// Container format of the audio file, e.g. "MP3".
    pub fn file_format(mut self, file_format: impl Into<String>) -> Self {
        self.file_format = Some(file_format.into());
        self
    }

    /// Append this entry's fields as `key[index]` parameters.
    fn append_indexed(&self, mut params: Params, index: usize) -> Params {
        params.push(
            format!("fingerprint[{index}]"),
            self.fingerprint.fingerprint(),
        );
        params.push(format!("duration[{index}]"), self.fingerprint.duration_secs());

        if let Some(ref mbid) = self.mbid {
            params.push(format!("mbid[{index}]"), mbid);
        }
        if let Some(ref track) = self.track {
            params.push(format!("track[{index}]"), track);
        }
        if let Some(ref artist) = self.artist {
            params.push(format!("artist[{index}]"), artist);
        }
        if let Some(ref album) = self.album {
            params.push(format!("album[{index}]"), album);
        }
        if let Some(ref album_artist) = self.album_artist {
            params.push(format!("albumartist[{index}]"), album_artist);
        }
        if let Some(year) = self.year {
            params.push(format!("year[{index}]"), year);
        }
        if let Some(track_no) = self.track_no {
            params.push(format!("trackno[{index}]"), track_no);
        }
        if let Some(disc_no) = self.disc_no {
            params.push(format!("discno[{index}]"), disc_no);
        }
        if let Some(bitrate) = self.bitrate {
            params.push(format!("bitrate[{index}]"), bitrate);
        }
        if let Some(ref file_format) = self.file_format {
            params.push(format!("fileformat[{index}]"), file_format);
        }

        params
    }
}

impl From<Fingerprint> for SubmissionEntry {
    fn from(fingerprint: Fingerprint) -> Self {
        Self::new(fingerprint)
    }
}

/// An ordered batch of fingerprints submitted together.
#[derive(Debug, Clone, Default)]
pub struct FingerprintBatch {
    entries: Vec<SubmissionEntry>,
}

impl FingerprintBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the batch.
    pub fn push(&mut self, entry: impl Into<SubmissionEntry>) {
        self.entries.push(entry.into());
    }

    /// Append an entry, chainable.
    pub fn with(mut self, entry: impl Into<SubmissionEntry>) -> Self {
        self.push(entry);
        self
    }

    /// Number of entries in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten the batch into indexed parameters, preserving entry order.
    pub(crate) fn append_params(&self, mut params: Params) -> Params {
        for (index, entry) in self.entries.iter().enumerate() {
            params = entry.append_indexed(params, index);
        }
        params
    }
}
