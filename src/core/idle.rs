//! Idle overlay: breathing, blinking, eye drift, talking oscillation
//!
//! Deterministic for a fixed seed and dt sequence; the only random draw is
//! the blink-interval schedule, taken from an injected seeded RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{ControlPoint, ControlPoints};
use crate::{
    BLINK_DEPTH, BLINK_DURATION_SECS, BLINK_INITIAL_MIN, BLINK_INITIAL_SPREAD,
    BLINK_RESCHEDULE_MIN, BLINK_RESCHEDULE_SPREAD, BREATH_AMPLITUDE, BREATH_FREQUENCY,
    DRIFT_X_AMPLITUDE, DRIFT_X_FREQUENCY, DRIFT_X_PHASE, DRIFT_Y_AMPLITUDE, DRIFT_Y_FREQUENCY,
    DRIFT_Y_PHASE, TALK_OSC_AMPLITUDE, TALK_OSC_FREQUENCY,
};

/// Adds autonomous life behaviors on top of a control-point frame
#[derive(Debug)]
pub struct IdleOverlay {
    rng: StdRng,
    clock: f64,
    next_blink: f64,
    blinking: bool,
    blink_t: f64,
}

impl IdleOverlay {
    /// Build with a fixed seed; the first blink lands uniformly in [2, 5) s
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let next_blink = BLINK_INITIAL_MIN + rng.gen::<f64>() * BLINK_INITIAL_SPREAD;
        Self {
            rng,
            clock: 0.0,
            next_blink,
            blinking: false,
            blink_t: 0.0,
        }
    }

    /// Apply idle behaviors for one tick. Returns a modified copy; the
    /// caller's frame is never mutated.
    pub fn step(&mut self, pts: &ControlPoints, dt: f64, talking: bool) -> ControlPoints {
        let dt = dt.max(0.0);
        self.clock += dt;
        let t = self.clock;
        let mut out = *pts;

        // Breathing: slow face_scale oscillation
        out[ControlPoint::FaceScale] += BREATH_AMPLITUDE * (t * BREATH_FREQUENCY).sin();

        // Blink scheduling: countdown, then a short closed-eye pulse
        self.next_blink -= dt;
        if self.next_blink <= 0.0 && !self.blinking {
            self.blinking = true;
            self.blink_t = 0.0;
            self.next_blink = BLINK_RESCHEDULE_MIN + self.rng.gen::<f64>() * BLINK_RESCHEDULE_SPREAD;
        }

        if self.blinking {
            self.blink_t += dt;
            if self.blink_t < BLINK_DURATION_SECS {
                let phase = self.blink_t / BLINK_DURATION_SECS;
                let closure = 1.0 - (phase * std::f64::consts::PI).sin() * BLINK_DEPTH;
                out[ControlPoint::LeftEyeOpen] *= closure;
                out[ControlPoint::RightEyeOpen] *= closure;
            } else {
                self.blinking = false;
            }
        }

        // Eye drift: both eyes move in lockstep
        let drift_x = DRIFT_X_AMPLITUDE * (t * DRIFT_X_FREQUENCY + DRIFT_X_PHASE).sin();
        let drift_y = DRIFT_Y_AMPLITUDE * (t * DRIFT_Y_FREQUENCY + DRIFT_Y_PHASE).sin();
        out[ControlPoint::LeftPupilX] += drift_x;
        out[ControlPoint::LeftPupilY] += drift_y;
        out[ControlPoint::RightPupilX] += drift_x;
        out[ControlPoint::RightPupilY] += drift_y;

        // Talking oscillation
        if talking {
            out[ControlPoint::MouthOpen] +=
                TALK_OSC_AMPLITUDE * (t * TALK_OSC_FREQUENCY * std::f64::consts::PI).sin().abs();
        }

        out
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_mutated() {
        let mut idle = IdleOverlay::new(42);
        let pts = ControlPoints::neutral();
        let _ = idle.step(&pts, 0.1, false);
        assert_eq!(pts, ControlPoints::neutral());
    }

    #[test]
    fn test_breathing_modulates_face_scale() {
        let mut idle = IdleOverlay::new(42);
        let pts = ControlPoints::neutral();
        let a = idle.step(&pts, 0.1, false)[ControlPoint::FaceScale];
        let b = idle.step(&pts, 0.5, false)[ControlPoint::FaceScale];
        assert!(a != b, "face_scale should vary over time");
        assert!((a - 1.0).abs() <= BREATH_AMPLITUDE + 1e-9);
    }

    #[test]
    fn test_eyes_drift_in_lockstep() {
        let mut idle = IdleOverlay::new(7);
        let out = idle.step(&ControlPoints::neutral(), 0.3, false);
        assert_eq!(out[ControlPoint::LeftPupilX], out[ControlPoint::RightPupilX]);
        assert_eq!(out[ControlPoint::LeftPupilY], out[ControlPoint::RightPupilY]);
    }

    #[test]
    fn test_talking_opens_mouth() {
        let mut idle = IdleOverlay::new(42);
        let quiet = idle.step(&ControlPoints::neutral(), 0.1, false);
        let mut idle2 = IdleOverlay::new(42);
        idle2.step(&ControlPoints::neutral(), 0.05, true);
        let talking = idle2.step(&ControlPoints::neutral(), 0.05, true);
        assert_eq!(quiet[ControlPoint::MouthOpen], 0.0);
        assert!(talking[ControlPoint::MouthOpen] > 0.0);
    }

    #[test]
    fn test_blink_closes_and_reopens() {
        let mut idle = IdleOverlay::new(42);
        let pts = ControlPoints::neutral();

        // Drive for 10 s at 100 Hz; some tick must land mid-blink
        let mut min_open: f64 = 1.0;
        for _ in 0..1000 {
            let out = idle.step(&pts, 0.01, false);
            min_open = min_open.min(out[ControlPoint::LeftEyeOpen]);
        }
        assert!(min_open < 0.5, "expected a blink within 10 s, min {}", min_open);

        // Blinks always end: most ticks in another second are eyes-open
        let mut max_open: f64 = 0.0;
        for _ in 0..100 {
            let out = idle.step(&pts, 0.01, false);
            max_open = max_open.max(out[ControlPoint::LeftEyeOpen]);
        }
        assert!(max_open > 0.9, "eyes should reopen after a blink, max {}", max_open);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = IdleOverlay::new(99);
        let mut b = IdleOverlay::new(99);
        let pts = ControlPoints::neutral();
        for _ in 0..600 {
            assert_eq!(a.step(&pts, 1.0 / 60.0, false), b.step(&pts, 1.0 / 60.0, false));
        }
    }

    #[test]
    fn test_seed_only_affects_blink_timing() {
        let mut a = IdleOverlay::new(1);
        let mut b = IdleOverlay::new(2);
        let pts = ControlPoints::neutral();
        for _ in 0..600 {
            let fa = a.step(&pts, 1.0 / 60.0, false);
            let fb = b.step(&pts, 1.0 / 60.0, false);
            // All channels except eye openness are seed-independent
            assert_eq!(fa[ControlPoint::FaceScale], fb[ControlPoint::FaceScale]);
            assert_eq!(fa[ControlPoint::LeftPupilX], fb[ControlPoint::LeftPupilX]);
            assert_eq!(fa[ControlPoint::LeftPupilY], fb[ControlPoint::LeftPupilY]);
            assert_eq!(fa[ControlPoint::MouthOpen], fb[ControlPoint::MouthOpen]);
        }
    }

    #[test]
    fn test_negative_dt_freezes_clock() {
        let mut idle = IdleOverlay::new(42);
        let pts = ControlPoints::neutral();
        let a = idle.step(&pts, 0.1, false);
        let b = idle.step(&pts, -0.5, false);
        assert_eq!(a, b);
    }
}
