//! Marker parser: extracts `<af:expression:intensity>` tags from the stream
//!
//! Tolerant of tags split across chunks: an unterminated `<af...` suffix is
//! withheld and re-prepended to the next chunk.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::types::{Expression, Marker, ParsedChunk};

lazy_static! {
    // Complete tag: <af:name> or <af:name:0.8>
    // Intensity is a plain non-negative decimal; anything else (a leading
    // minus, a bare dot) fails the grammar and the text passes through.
    static ref RE_TAG: Regex = Regex::new(
        r"(?i)<af:(\w+)(?::([0-9]*\.?[0-9]+))?>"
    ).unwrap();

    // Incomplete tag at the end of a chunk (potential partial). A lone "<"
    // or "<a" suffix is also withheld so that a tag split at any byte is
    // recovered; anything that has already diverged from "<af" flows through.
    static ref RE_PARTIAL: Regex = Regex::new(r"(?i)(?:<af[^>]*|<a|<)$").unwrap();
}

/// Parse one chunk of raw text for af markers.
///
/// `pending` is the leftover partial tag from the previous call; it is
/// prepended before scanning. Returns the cleaned text, the markers found
/// in left-to-right order, and any new trailing partial to carry forward.
pub fn parse(text: &str, pending: &str) -> ParsedChunk {
    let combined = format!("{}{}", pending, text);
    let mut markers: Vec<Marker> = Vec::new();

    let clean = RE_TAG.replace_all(&combined, |caps: &Captures| {
        let name = &caps[1];
        match Expression::from_name(name) {
            Some(expression) => {
                let intensity = caps
                    .get(2)
                    .and_then(|m| m.as_str().parse::<f64>().ok())
                    .map(|v| v.clamp(0.0, 1.0))
                    .unwrap_or(1.0);
                markers.push(Marker {
                    expression,
                    intensity,
                });
            }
            None => {} // unknown name: strip silently, no marker
        }
        String::new()
    });

    let mut clean = clean.into_owned();
    let mut new_pending = String::new();
    if let Some(partial) = RE_PARTIAL.find(&clean) {
        let start = partial.start();
        new_pending = clean[start..].to_string();
        clean.truncate(start);
    }

    ParsedChunk {
        clean,
        markers,
        pending: new_pending,
    }
}

// =============================================================================
// TESTS
// =============================================================================
