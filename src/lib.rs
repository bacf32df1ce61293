//! Facepipe: streaming text → facial-animation control frames
//!
//! Text in (with optional `<af:...>` markers), MocapFrame JSON lines out
//! at a steady frame rate.

pub mod core;
pub mod types;

// =============================================================================
// MARKER SIGNALS
// =============================================================================

/// Linear decay rate for marker-driven signals (weight units per second)
pub const MARKER_DECAY_RATE: f64 = 0.3;

/// Signals at or below this intensity are dropped
pub const MARKER_FLOOR: f64 = 0.001;

// =============================================================================
// SENTIMENT → EXPRESSION RULE TABLE
// =============================================================================

/// Valence dead zone: |valence| at or below this maps to nothing
pub const VALENCE_DEADBAND: f64 = 0.05;

/// Valence below -this starts contributing anger
pub const ANGER_ONSET: f64 = 0.3;

/// Arousal above this contributes surprise
pub const SURPRISE_ONSET: f64 = 0.3;

/// Arousal above this (with near-neutral valence) contributes thinking
pub const THINKING_AROUSAL_MIN: f64 = 0.1;

/// |valence| below this counts as near-neutral for the thinking rule
pub const THINKING_VALENCE_MAX: f64 = 0.2;

/// Fixed talking-dim weight while speech is active
pub const TALKING_WEIGHT: f64 = 0.3;

// =============================================================================
// SENTIMENT ENGINE TUNING
// =============================================================================

/// Gain applied to the word-normalized lexicon score per feed
pub const VALENCE_GAIN: f64 = 0.6;

/// Gain applied to the word-normalized arousal score per feed
pub const AROUSAL_GAIN: f64 = 0.5;

/// Arousal bump per exclamation mark
pub const EXCLAMATION_AROUSAL: f64 = 0.08;

/// Mood decay rate toward zero (fraction per second)
pub const MOOD_DECAY_RATE: f64 = 0.4;

/// Seconds of silence after which the talking flag expires
pub const TALKING_SILENCE_SECS: f64 = 0.8;

// =============================================================================
// IDLE OVERLAY
// =============================================================================

/// Breathing amplitude on face_scale
pub const BREATH_AMPLITUDE: f64 = 0.008;

/// Breathing angular frequency (radians per second)
pub const BREATH_FREQUENCY: f64 = 1.5;

/// Blink duration in seconds
pub const BLINK_DURATION_SECS: f64 = 0.15;

/// How far a blink closes the eyes (multiplier depth)
pub const BLINK_DEPTH: f64 = 0.95;

/// First blink is scheduled uniformly in [min, min+spread) seconds
pub const BLINK_INITIAL_MIN: f64 = 2.0;
pub const BLINK_INITIAL_SPREAD: f64 = 3.0;

/// Subsequent blinks are scheduled uniformly in [min, min+spread) seconds
pub const BLINK_RESCHEDULE_MIN: f64 = 2.0;
pub const BLINK_RESCHEDULE_SPREAD: f64 = 4.0;

/// Pupil drift on the x axis: amplitude, frequency (rad/s), phase
pub const DRIFT_X_AMPLITUDE: f64 = 0.008;
pub const DRIFT_X_FREQUENCY: f64 = 0.7;
pub const DRIFT_X_PHASE: f64 = 1.3;

/// Pupil drift on the y axis: amplitude, frequency (rad/s), phase
pub const DRIFT_Y_AMPLITUDE: f64 = 0.005;
pub const DRIFT_Y_FREQUENCY: f64 = 0.5;
pub const DRIFT_Y_PHASE: f64 = 2.7;

/// Talking mouth-oscillation amplitude
pub const TALK_OSC_AMPLITUDE: f64 = 0.15;

/// Talking mouth-oscillation frequency multiplier (× π rad/s)
pub const TALK_OSC_FREQUENCY: f64 = 5.0;

// =============================================================================
// EMISSION
// =============================================================================

/// Default target frame rate
pub const DEFAULT_FPS: u32 = 30;

/// Default idle-overlay RNG seed
pub const DEFAULT_IDLE_SEED: u64 = 42;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
