//! Frame emitter: fixed-rate gate and frame packaging
//!
//! The gate accumulates elapsed time and releases at most one frame per
//! call. Under sustained oversized dt the rate degrades visibly; frames
//! are dropped, never queued for catch-up.

use std::io::Write;

use crate::types::{ControlPoints, MocapFrame};

/// Caller-supplied frame delivery callback
pub type FrameSink = Box<dyn FnMut(&MocapFrame)>;

/// Emits MocapFrame at a steady rate
pub struct FrameEmitter {
    frame_interval: f64,
    accumulator: f64,
    sink: Option<FrameSink>,
}

impl FrameEmitter {
    /// Emit to stdout as JSON lines
    pub fn new(fps: u32) -> Self {
        Self {
            frame_interval: 1.0 / f64::from(fps.max(1)),
            accumulator: 0.0,
            sink: None,
        }
    }

    /// Emit through a callback instead of stdout
    pub fn with_sink(fps: u32, sink: FrameSink) -> Self {
        let mut emitter = Self::new(fps);
        emitter.sink = Some(sink);
        emitter
    }

    /// Has enough time passed to emit a frame?
    ///
    /// Subtracts exactly one interval on release, at most once per call.
    pub fn should_emit(&mut self, dt: f64) -> bool {
        self.accumulator += dt.max(0.0);
        if self.accumulator >= self.frame_interval {
            self.accumulator -= self.frame_interval;
            return true;
        }
        false
    }

    /// Package points into a frame and deliver it.
    ///
    /// The timestamp is rounded to 4 decimals, values to 6. Every channel
    /// is always present; the frame type carries the full vocabulary.
    pub fn emit(&mut self, pts: &ControlPoints, timestamp: f64) -> MocapFrame {
        let frame = MocapFrame {
            t: (timestamp * 1e4).round() / 1e4,
            pts: pts.rounded(),
        };

        match &mut self.sink {
            Some(sink) => sink(&frame),
            None => {
                let mut stdout = std::io::stdout().lock();
                let _ = writeln!(stdout, "{}", frame.to_json());
                let _ = stdout.flush();
            }
        }

        frame
    }

    /// Target seconds between frames
    pub fn frame_interval(&self) -> f64 {
        self.frame_interval
    }
}

impl std::fmt::Debug for FrameEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameEmitter")
            .field("frame_interval", &self.frame_interval)
            .field("accumulator", &self.accumulator)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
