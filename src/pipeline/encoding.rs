//! Input decoding with statistical detection and legacy-encoding fallbacks
//!
//! Input files arrive in whatever encoding their author happened to use, so
//! every file goes through the same chain: statistical detection, a strict
//! decode with the detected encoding, then an ordered fallback list of the
//! encodings Chinese text is most commonly stored in, and finally a lossy
//! UTF-8 decode that substitutes U+FFFD and cannot fail.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, BIG5, GB18030, GBK, UTF_8};

/// One file's decoded content plus provenance for reporting.
#[derive(Debug)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
    /// True when undecodable bytes were replaced with U+FFFD.
    pub lossy: bool,
}

/// Decode raw file bytes, never failing.
pub fn decode_text(bytes: &[u8]) -> Decoded {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let detected = detector.guess(None, true);

    if let Some(text) = decode_strict(detected, bytes) {
        return Decoded {
            text,
            encoding: detected,
            lossy: false,
        };
    }

    decode_with_fallbacks(bytes)
}

/// Try the fixed fallback list in priority order, then fall back to a lossy
/// UTF-8 decode.
pub fn decode_with_fallbacks(bytes: &[u8]) -> Decoded {
    let fallbacks: [&'static Encoding; 4] = [GB18030, GBK, BIG5, UTF_8];
    for encoding in fallbacks {
        if let Some(text) = decode_strict(encoding, bytes) {
            return Decoded {
                text,
                encoding,
                lossy: false,
            };
        }
    }

    let (text, _, _) = UTF_8.decode(bytes);
    Decoded {
        text: text.into_owned(),
        encoding: UTF_8,
        lossy: true,
    }
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}
