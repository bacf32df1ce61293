//! Signal merger: blends decaying marker signals and ambient sentiment
//! into one normalized expression vector per tick.
//!
//! Two-tier priority: the ambient vector is the base, and marker signals
//! can only raise a dimension, never lower it. The two vectors are held
//! separately and merged at read time, so nothing accumulates or drifts.

use crate::types::{Expression, ExpressionVector};
use crate::{
    ANGER_ONSET, MARKER_DECAY_RATE, MARKER_FLOOR, SURPRISE_ONSET, TALKING_WEIGHT,
    THINKING_AROUSAL_MIN, THINKING_VALENCE_MAX, VALENCE_DEADBAND,
};

/// One live marker-driven signal
#[derive(Debug, Clone, Copy)]
struct MarkerSignal {
    expression: Expression,
    intensity: f64,
}

/// Combines marker and sentiment signals into a single expression vector
#[derive(Debug, Default)]
pub struct SignalMerger {
    // At most one live signal per expression, so never more than 8 entries
    markers: Vec<MarkerSignal>,
    ambient: ExpressionVector,
}

impl SignalMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject a marker-driven expression signal.
    ///
    /// Replaces any prior signal for the same expression: fresh age, fresh
    /// clamped intensity. Never adds to the prior value.
    pub fn push_marker(&mut self, expression: Expression, intensity: f64) {
        self.markers.retain(|m| m.expression != expression);
        self.markers.push(MarkerSignal {
            expression,
            intensity: intensity.clamp(0.0, 1.0),
        });
    }

    /// Update the ambient sentiment signal.
    ///
    /// Rebuilds the whole ambient vector from the rule table; the previous
    /// vector is fully overwritten, last call wins.
    pub fn push_sentiment(&mut self, valence: f64, arousal: f64, talking: bool) {
        let mut w = ExpressionVector::zero();

        if valence > VALENCE_DEADBAND {
            w[Expression::Happy] = valence;
        } else if valence < -VALENCE_DEADBAND {
            w[Expression::Sad] = valence.abs();
            if valence < -ANGER_ONSET {
                w[Expression::Angry] = (valence.abs() - ANGER_ONSET) * 0.5;
            }
        }

        if arousal > SURPRISE_ONSET {
            w[Expression::Surprised] = (arousal - SURPRISE_ONSET) * 0.5;
        }

        // Thinking: some arousal, near-neutral valence
        if arousal > THINKING_AROUSAL_MIN && valence.abs() < THINKING_VALENCE_MAX {
            w[Expression::Thinking] = arousal * 0.5;
        }

        if talking {
            w[Expression::Talking] = TALKING_WEIGHT;
        }

        self.ambient = w;
    }

    /// Advance marker decay and return the blended expression vector.
    pub fn step(&mut self, dt: f64) -> ExpressionVector {
        let dt = dt.max(0.0);

        for m in &mut self.markers {
            m.intensity = (m.intensity - MARKER_DECAY_RATE * dt).max(0.0);
        }
        self.markers.retain(|m| m.intensity > MARKER_FLOOR);

        // Ambient is the base; markers raise their dimension
        let mut result = self.ambient;
        for m in &self.markers {
            result.raise(m.expression, m.intensity);
        }

        // Downscale-only normalization: sum must stay ≤ 1
        let total = result.sum();
        if total > 1.0 {
            result.scale_down(total);
        }

        result
    }

    /// Number of live marker signals
    pub fn live_markers(&self) -> usize {
        self.markers.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
