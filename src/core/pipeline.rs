//! Pipeline: wires parser, sentiment engine, merger, expression map,
//! idle overlay, and emitter into the two-call public surface.
//!
//! `feed` and `step` are the entire API. The embedding host owns the
//! timing loop and the time source; neither call blocks or performs I/O
//! beyond the emitter's sink.

use crate::core::emitter::{FrameEmitter, FrameSink};
use crate::core::expression_map::ExpressionMap;
use crate::core::idle::IdleOverlay;
use crate::core::marker;
use crate::core::merger::SignalMerger;
use crate::core::sentiment::SentimentEngine;
use crate::types::MocapFrame;
use crate::{DEFAULT_FPS, DEFAULT_IDLE_SEED};

/// Pipeline construction knobs
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Target frame rate
    pub fps: u32,
    /// Seed for the idle overlay's blink scheduler
    pub idle_seed: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            idle_seed: DEFAULT_IDLE_SEED,
        }
    }
}

/// Full pipeline: text in → MocapFrame out
#[derive(Debug)]
pub struct Pipeline {
    pending: String,
    sentiment: SentimentEngine,
    merger: SignalMerger,
    map: ExpressionMap,
    idle: IdleOverlay,
    emitter: FrameEmitter,
}

impl Pipeline {
    /// Pipeline emitting JSON lines to stdout
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            pending: String::new(),
            sentiment: SentimentEngine::new(),
            merger: SignalMerger::new(),
            map: ExpressionMap::new(),
            idle: IdleOverlay::new(config.idle_seed),
            emitter: FrameEmitter::new(config.fps),
        }
    }

    /// Pipeline delivering frames to a callback
    pub fn with_sink(config: PipelineConfig, sink: FrameSink) -> Self {
        let mut pipeline = Self::new(config);
        pipeline.emitter = FrameEmitter::with_sink(config.fps, sink);
        pipeline
    }

    /// Feed raw text (may contain `<af:...>` markers).
    ///
    /// Markers go to the merger, clean text to the sentiment engine, and
    /// any trailing partial tag is buffered for the next call. Returns the
    /// clean text.
    pub fn feed(&mut self, text: &str, timestamp: f64) -> String {
        let parsed = marker::parse(text, &self.pending);
        self.pending = parsed.pending;

        if !parsed.clean.trim().is_empty() {
            self.sentiment.feed(&parsed.clean, timestamp);
        }

        for m in &parsed.markers {
            self.merger.push_marker(m.expression, m.intensity);
        }

        parsed.clean
    }

    /// Advance one tick. Emits a frame when the rate gate fires.
    ///
    /// Decay and idle clocks advance on every call; emission is only a
    /// sampling gate over the continuously advancing state.
    pub fn step(&mut self, dt: f64, timestamp: f64) -> Option<MocapFrame> {
        self.sentiment.step(dt, timestamp);

        // One snapshot per tick: the same talking flag drives both the
        // ambient talking weight and the idle mouth oscillation
        let emotion = self.sentiment.emotion();
        self.merger
            .push_sentiment(emotion.valence, emotion.arousal, emotion.talking);

        let vector = self.merger.step(dt);
        let base = self.map.map(&vector);
        let pts = self.idle.step(&base, dt, emotion.talking);

        if self.emitter.should_emit(dt) {
            Some(self.emitter.emit(&pts, timestamp))
        } else {
            None
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================
