//! Ambient mood snapshot read by the pipeline each tick

use serde::Serialize;

/// Read-only sentiment snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Emotion {
    /// Pleasantness in [-1, 1]
    pub valence: f64,
    /// Activation in [0, 1]
    pub arousal: f64,
    /// Recent-speech flag
    pub talking: bool,
}

impl Emotion {
    /// Flat neutral mood
    pub fn neutral() -> Self {
        Self {
            valence: 0.0,
            arousal: 0.0,
            talking: false,
        }
    }

    /// Build a snapshot with both scalars clamped to their ranges
    pub fn clamped(valence: f64, arousal: f64, talking: bool) -> Self {
        Self {
            valence: valence.clamp(-1.0, 1.0),
            arousal: arousal.clamp(0.0, 1.0),
            talking,
        }
    }
}

impl Default for Emotion {
    fn default() -> Self {
        Self::neutral()
    }
}
