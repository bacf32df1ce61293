//! Sentiment engine: lexicon estimate of valence, arousal, and talking
//!
//! Word-class regexes score clean text into a mood that decays toward
//! neutral in silence. The talking flag tracks recent speech.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Emotion;
use crate::{
    AROUSAL_GAIN, EXCLAMATION_AROUSAL, MOOD_DECAY_RATE, TALKING_SILENCE_SECS, VALENCE_GAIN,
};

lazy_static! {
    // Positive valence words
    static ref RE_POSITIVE: Regex = Regex::new(
        r"(?i)\b(great|good|wonderful|excellent|awesome|amazing|fantastic|brilliant|love|lovely|nice|perfect|happy|glad|delightful|beautiful|yes)\b"
    ).unwrap();

    // Negative valence words
    static ref RE_NEGATIVE: Regex = Regex::new(
        r"(?i)\b(bad|terrible|awful|horrible|error|crash|fail|failed|failure|broken|wrong|sad|hate|bug|worse|worst|problem|ugly|no)\b"
    ).unwrap();

    // High-activation words
    static ref RE_AROUSAL: Regex = Regex::new(
        r"(?i)\b(wow|exciting|excited|danger|dangerous|crash|urgent|amazing|incredible|hurry|alert|sudden|suddenly|surprise|shocking)\b"
    ).unwrap();
}

/// Mood state fed by clean text and read once per tick
#[derive(Debug, Default)]
pub struct SentimentEngine {
    valence: f64,
    arousal: f64,
    last_speech: Option<f64>,
    talking: bool,
}

impl SentimentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest clean text, shifting mood and marking recent speech.
    pub fn feed(&mut self, text: &str, timestamp: f64) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let word_count = text.split_whitespace().count().max(1) as f64;
        let positive = count_matches(&RE_POSITIVE, text);
        let negative = count_matches(&RE_NEGATIVE, text);
        let excitement = count_matches(&RE_AROUSAL, text);
        let exclamations = text.matches('!').count() as f64;

        self.valence += (positive - negative) / word_count * VALENCE_GAIN;
        self.arousal += excitement / word_count * AROUSAL_GAIN + exclamations * EXCLAMATION_AROUSAL;

        // Clamp on every update, however extreme the cumulative input
        self.valence = self.valence.clamp(-1.0, 1.0);
        self.arousal = self.arousal.clamp(0.0, 1.0);

        self.last_speech = Some(timestamp);
        self.talking = true;
    }

    /// Decay mood toward neutral and expire the talking flag.
    pub fn step(&mut self, dt: f64, timestamp: f64) {
        let dt = dt.max(0.0);
        let factor = (1.0 - MOOD_DECAY_RATE * dt).clamp(0.0, 1.0);
        self.valence *= factor;
        self.arousal *= factor;

        self.talking = match self.last_speech {
            Some(t) => timestamp - t < TALKING_SILENCE_SECS,
            None => false,
        };
    }

    /// Current mood snapshot
    pub fn emotion(&self) -> Emotion {
        Emotion::clamped(self.valence, self.arousal, self.talking)
    }
}

/// Count regex matches in text
fn count_matches(regex: &Regex, text: &str) -> f64 {
    regex.find_iter(text).count() as f64
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text_increases_valence() {
        let mut engine = SentimentEngine::new();
        engine.feed("This is great wonderful excellent", 1.0);
        assert!(engine.emotion().valence > 0.1);
    }

    #[test]
    fn test_negative_text_decreases_valence() {
        let mut engine = SentimentEngine::new();
        engine.feed("error crash fail broken terrible", 1.0);
        assert!(engine.emotion().valence < -0.1);
    }

    #[test]
    fn test_neutral_text_stays_near_zero() {
        let mut engine = SentimentEngine::new();
        engine.feed("the cat sat on the mat", 1.0);
        assert!(engine.emotion().valence.abs() < 0.1);
    }

    #[test]
    fn test_decay_in_silence() {
        let mut engine = SentimentEngine::new();
        engine.feed("great wonderful awesome", 1.0);
        let initial = engine.emotion().valence;
        assert!(initial > 0.0);

        // 5 seconds of silence
        for _ in 0..50 {
            engine.step(0.1, 6.0);
        }

        assert!(engine.emotion().valence.abs() < initial.abs() * 0.5);
    }

    #[test]
    fn test_talking_detection() {
        let mut engine = SentimentEngine::new();
        engine.feed("hello", 1.0);
        engine.step(0.01, 1.01);
        assert!(engine.emotion().talking);

        // After silence
        engine.step(0.01, 2.0);
        assert!(!engine.emotion().talking);
    }

    #[test]
    fn test_valence_clamped() {
        let mut engine = SentimentEngine::new();
        for _ in 0..20 {
            engine.feed("great excellent perfect wonderful", 1.0);
        }
        let e = engine.emotion();
        assert!(e.valence <= 1.0);
        assert!(e.valence >= -1.0);
    }

    #[test]
    fn test_arousal_clamped() {
        let mut engine = SentimentEngine::new();
        for _ in 0..20 {
            engine.feed("! wow crash danger exciting", 1.0);
        }
        let e = engine.emotion();
        assert!(e.arousal <= 1.0);
        assert!(e.arousal >= 0.0);
    }

    #[test]
    fn test_exclamations_raise_arousal() {
        let mut engine = SentimentEngine::new();
        engine.feed("look at that!!", 1.0);
        assert!(engine.emotion().arousal > 0.0);
    }

    #[test]
    fn test_negative_dt_does_not_decay() {
        let mut engine = SentimentEngine::new();
        engine.feed("great wonderful", 1.0);
        let before = engine.emotion().valence;
        engine.step(-5.0, 1.0);
        assert_eq!(engine.emotion().valence, before);
    }
}
