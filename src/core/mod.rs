//! Core behavior modules for facepipe

pub mod emitter;
pub mod expression_map;
pub mod idle;
pub mod marker;
pub mod merger;
pub mod pipeline;
pub mod sentiment;

pub use emitter::{FrameEmitter, FrameSink};
pub use expression_map::ExpressionMap;
pub use idle::IdleOverlay;
pub use merger::SignalMerger;
pub use pipeline::{Pipeline, PipelineConfig};
pub use sentiment::SentimentEngine;
