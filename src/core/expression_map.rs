//! Expression map: expression vector → control-point frame
//!
//! Hand-tuned template poses, one per expression class. The table is
//! immutable and owned by the map instance, not process-wide state.

use crate::types::{ControlPoint, ControlPoints, Expression, ExpressionVector, EXPRESSION_DIM};

use ControlPoint::*;

/// Target pose per expression, as (channel, target value) pairs.
/// Channels not listed stay at neutral.
type Template = &'static [(ControlPoint, f64)];

const HAPPY: Template = &[
    (LeftEyeOpen, 0.85),
    (RightEyeOpen, 0.85),
    (MouthWide, 0.04),
    (MouthSmile, 0.25),
    (MouthOpen, 0.08),
];

const SAD: Template = &[
    (LeftEyeOpen, 0.6),
    (RightEyeOpen, 0.6),
    (MouthSmile, -0.25),
    (LeftBrowAngle, -0.12),
    (LeftBrowHeight, -0.02),
    (RightBrowAngle, 0.12),
    (RightBrowHeight, -0.02),
];

const THINKING: Template = &[
    (LeftEyeOpen, 0.7),
    (RightEyeOpen, 0.7),
    (LeftPupilX, 0.02),
    (LeftPupilY, -0.01),
    (RightPupilX, 0.02),
    (RightPupilY, -0.01),
    (MouthSmile, -0.08),
    (LeftBrowAngle, 0.12),
    (LeftBrowHeight, 0.03),
    (RightBrowAngle, -0.04),
    (RightBrowHeight, 0.01),
];

const SURPRISED: Template = &[
    (LeftEyeOpen, 1.3),
    (RightEyeOpen, 1.3),
    (MouthOpen, 0.45),
    (MouthWide, -0.03),
    (LeftBrowHeight, 0.06),
    (RightBrowHeight, 0.06),
];

const CONFUSED: Template = &[
    (LeftEyeOpen, 0.8),
    (RightEyeOpen, 0.6),
    (LeftPupilX, -0.01),
    (RightPupilX, 0.01),
    (MouthSmile, -0.12),
    (MouthOpen, 0.04),
    (LeftBrowAngle, 0.18),
    (LeftBrowHeight, 0.04),
    (RightBrowAngle, -0.12),
    (RightBrowHeight, -0.01),
];

const ANGRY: Template = &[
    (LeftEyeOpen, 0.7),
    (RightEyeOpen, 0.7),
    (MouthSmile, -0.2),
    (MouthOpen, 0.05),
    (LeftBrowAngle, 0.15),
    (LeftBrowHeight, -0.03),
    (RightBrowAngle, -0.15),
    (RightBrowHeight, -0.03),
];

const NEUTRAL: Template = &[];

const TALKING: Template = &[(MouthOpen, 0.35), (MouthSmile, 0.03)];

/// Maps an expression vector to a control-point frame
#[derive(Debug)]
pub struct ExpressionMap {
    templates: [Template; EXPRESSION_DIM],
}

impl Default for ExpressionMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionMap {
    /// Build the map with the built-in template table
    pub fn new() -> Self {
        // Same order as Expression::ALL
        Self {
            templates: [
                HAPPY, SAD, THINKING, SURPRISED, CONFUSED, ANGRY, NEUTRAL, TALKING,
            ],
        }
    }

    /// Blend the weighted templates into a frame, starting from neutral.
    ///
    /// For each weighted expression, every listed channel moves toward its
    /// template target in proportion to the weight.
    pub fn map(&self, vector: &ExpressionVector) -> ControlPoints {
        let mut pts = ControlPoints::neutral();

        for (expression, &weight) in Expression::ALL.iter().zip(vector.as_slice()) {
            if weight < 0.001 {
                continue;
            }
            for &(point, target) in self.templates[expression.index()] {
                pts[point] += (target - point.neutral()) * weight;
            }
        }

        pts
    }
}

// =============================================================================
// TESTS
// =============================================================================
