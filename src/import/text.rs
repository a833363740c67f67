//! Byte-to-text decoding for imported files.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;
use tracing::warn;

/// Decode an imported file into text.
///
/// A byte-order mark wins; otherwise valid UTF-8 is taken as is and anything
/// else goes through encoding detection. Malformed sequences are replaced
/// rather than rejected.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => {
            if let Ok(text) = std::str::from_utf8(bytes) {
                return Cow::Borrowed(text);
            }
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            (detector.guess(None, true), bytes)
        }
    };

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body);
    }

    let (decoded, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        warn!(
            encoding = encoding.name(),
            "Decoding errors occurred while reading import file"
        );
    }
    decoded
}
