//! Control-point vocabulary, neutral defaults, and the emitted frame

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::{Index, IndexMut};

/// Number of control points in a frame
pub const CONTROL_POINT_DIM: usize = 18;

/// The 18 named animation channels a frame carries
///
/// Ordering is fixed; consumers depend on key presence and semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPoint {
    LeftEyeOpen,
    RightEyeOpen,
    LeftPupilX,
    LeftPupilY,
    RightPupilX,
    RightPupilY,
    LeftBrowHeight,
    LeftBrowAngle,
    RightBrowHeight,
    RightBrowAngle,
    MouthOpen,
    MouthWide,
    MouthSmile,
    JawOpen,
    FaceScale,
    HeadPitch,
    HeadYaw,
    HeadRoll,
}

impl ControlPoint {
    /// All control points in canonical order
    pub const ALL: [ControlPoint; CONTROL_POINT_DIM] = [
        ControlPoint::LeftEyeOpen,
        ControlPoint::RightEyeOpen,
        ControlPoint::LeftPupilX,
        ControlPoint::LeftPupilY,
        ControlPoint::RightPupilX,
        ControlPoint::RightPupilY,
        ControlPoint::LeftBrowHeight,
        ControlPoint::LeftBrowAngle,
        ControlPoint::RightBrowHeight,
        ControlPoint::RightBrowAngle,
        ControlPoint::MouthOpen,
        ControlPoint::MouthWide,
        ControlPoint::MouthSmile,
        ControlPoint::JawOpen,
        ControlPoint::FaceScale,
        ControlPoint::HeadPitch,
        ControlPoint::HeadYaw,
        ControlPoint::HeadRoll,
    ];

    /// Wire-format key for this channel
    pub fn name(&self) -> &'static str {
        match self {
            ControlPoint::LeftEyeOpen => "left_eye_open",
            ControlPoint::RightEyeOpen => "right_eye_open",
            ControlPoint::LeftPupilX => "left_pupil_x",
            ControlPoint::LeftPupilY => "left_pupil_y",
            ControlPoint::RightPupilX => "right_pupil_x",
            ControlPoint::RightPupilY => "right_pupil_y",
            ControlPoint::LeftBrowHeight => "left_brow_height",
            ControlPoint::LeftBrowAngle => "left_brow_angle",
            ControlPoint::RightBrowHeight => "right_brow_height",
            ControlPoint::RightBrowAngle => "right_brow_angle",
            ControlPoint::MouthOpen => "mouth_open",
            ControlPoint::MouthWide => "mouth_wide",
            ControlPoint::MouthSmile => "mouth_smile",
            ControlPoint::JawOpen => "jaw_open",
            ControlPoint::FaceScale => "face_scale",
            ControlPoint::HeadPitch => "head_pitch",
            ControlPoint::HeadYaw => "head_yaw",
            ControlPoint::HeadRoll => "head_roll",
        }
    }

    /// Resting value for this channel
    pub fn neutral(&self) -> f64 {
        match self {
            ControlPoint::LeftEyeOpen | ControlPoint::RightEyeOpen | ControlPoint::FaceScale => 1.0,
            _ => 0.0,
        }
    }

    /// Slot index in a [`ControlPoints`] frame
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ControlPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fixed 18-slot control-point frame
///
/// Full coverage holds by construction: every channel always has a value,
/// and `Default` is the neutral pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints([f64; CONTROL_POINT_DIM]);

impl Default for ControlPoints {
    fn default() -> Self {
        Self::neutral()
    }
}

impl ControlPoints {
    /// The neutral resting pose
    pub fn neutral() -> Self {
        let mut pts = [0.0; CONTROL_POINT_DIM];
        for point in ControlPoint::ALL {
            pts[point.index()] = point.neutral();
        }
        Self(pts)
    }

    /// Value by wire name, for generic consumers
    pub fn get(&self, name: &str) -> Option<f64> {
        ControlPoint::ALL
            .iter()
            .find(|p| p.name() == name)
            .map(|p| self.0[p.index()])
    }

    /// Copy with every value rounded to 6 decimal places
    pub fn rounded(&self) -> Self {
        let mut pts = self.0;
        for v in &mut pts {
            *v = (*v * 1e6).round() / 1e6;
        }
        Self(pts)
    }
}

impl Index<ControlPoint> for ControlPoints {
    type Output = f64;

    fn index(&self, point: ControlPoint) -> &f64 {
        &self.0[point.index()]
    }
}

impl IndexMut<ControlPoint> for ControlPoints {
    fn index_mut(&mut self, point: ControlPoint) -> &mut f64 {
        &mut self.0[point.index()]
    }
}

impl Serialize for ControlPoints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CONTROL_POINT_DIM))?;
        for point in ControlPoint::ALL {
            map.serialize_entry(point.name(), &self.0[point.index()])?;
        }
        map.end()
    }
}

/// One emitted animation frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MocapFrame {
    /// Timestamp in seconds
    pub t: f64,
    /// The 18 control-point values
    pub pts: ControlPoints,
}

impl MocapFrame {
    /// Compact single-line JSON encoding
    pub fn to_json(&self) -> String {
        // Serialization of a fixed struct over plain floats cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_defaults() {
        let pts = ControlPoints::neutral();
        assert_eq!(pts[ControlPoint::LeftEyeOpen], 1.0);
        assert_eq!(pts[ControlPoint::RightEyeOpen], 1.0);
        assert_eq!(pts[ControlPoint::FaceScale], 1.0);
        assert_eq!(pts[ControlPoint::MouthOpen], 0.0);
        assert_eq!(pts[ControlPoint::HeadRoll], 0.0);
    }

    #[test]
    fn test_json_has_all_18_keys() {
        let frame = MocapFrame {
            t: 1.0,
            pts: ControlPoints::neutral(),
        };
        let parsed: serde_json::Value = serde_json::from_str(&frame.to_json()).unwrap();
        let pts = parsed["pts"].as_object().unwrap();
        assert_eq!(pts.len(), CONTROL_POINT_DIM);
        for point in ControlPoint::ALL {
            assert!(pts.contains_key(point.name()), "missing {}", point.name());
        }
    }

    #[test]
    fn test_rounding() {
        let mut pts = ControlPoints::neutral();
        pts[ControlPoint::MouthSmile] = 0.123456789;
        let rounded = pts.rounded();
        assert_eq!(rounded[ControlPoint::MouthSmile], 0.123457);
    }

    #[test]
    fn test_get_by_name() {
        let pts = ControlPoints::neutral();
        assert_eq!(pts.get("face_scale"), Some(1.0));
        assert_eq!(pts.get("elbow"), None);
    }
}
