//! Request-body compression.
//!
//! Fingerprints run to several kilobytes each, so the service accepts
//! gzip-compressed POST bodies. The trait keeps the encoding next to the
//! bytes it produces; the sender sets the `Content-Encoding` header from
//! the same source.

use std::io::{self, Write};

use flate2::Compression;
use flate2::write::GzEncoder;

/// Byte-stream compressor applied to POST bodies.
pub(crate) trait Compressor {
    /// Value for the `Content-Encoding` header.
    fn encoding(&self) -> &'static str;

    /// Compress the full body.
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>>;
}

/// Gzip, the only encoding the service accepts.
pub(crate) struct GzipCompressor;

impl Compressor for GzipCompressor {
    fn encoding(&self) -> &'static str {
        "gzip"
    }

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data)?;
        encoder.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::GzDecoder;

    use super::*;

    #[test]
    fn test_gzip_round_trip() {
        let body = "fingerprint=AQADtEmi&duration=231";
        let compressed = GzipCompressor.compress(body.as_bytes()).unwrap();

        let mut decoded = String::new();
        GzDecoder::new(compressed.as_slice())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, body);
    }

    #[test]
    fn test_encoding_header_value() {
        assert_eq!(GzipCompressor.encoding(), "gzip");
    }
}
