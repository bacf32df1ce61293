//! Core types for facepipe

mod control;
mod emotion;
mod expression;
mod marker;

pub use control::{ControlPoint, ControlPoints, MocapFrame, CONTROL_POINT_DIM};
pub use emotion::Emotion;
pub use expression::{Expression, ExpressionVector, EXPRESSION_DIM};
pub use marker::{Marker, ParsedChunk};
