//! Marker tag data extracted from the text stream

use crate::types::Expression;

/// Explicit author-inserted expression tag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Which expression the tag names
    pub expression: Expression,
    /// Requested weight, already clamped to [0, 1]
    pub intensity: f64,
}

/// Result of one parse call over a stream chunk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedChunk {
    /// Input text with all recognized tags stripped
    pub clean: String,
    /// Extracted markers in left-to-right order of appearance
    pub markers: Vec<Marker>,
    /// Trailing unterminated tag prefix to carry into the next call
    pub pending: String,
}
