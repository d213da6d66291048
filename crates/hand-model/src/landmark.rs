//! Hand landmark topology and normalized 2D geometry.
//!
//! All coordinates are normalized to `[0.0, 1.0]` range: `(0.0, 0.0)`
//! is the top-left of the camera image, y grows downward. The 21-point
//! topology and its ordering match the upstream hand-tracking detector,
//! so recorded streams map onto `HandPose` index-for-index.

use serde::{Deserialize, Serialize};

/// Number of landmarks in a full hand pose.
pub const LANDMARK_COUNT: usize = 21;

/// A 2D normalized point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Linear interpolation between two points.
    pub fn lerp(a: &Point2D, b: &Point2D, t: f64) -> Point2D {
        let t = t.clamp(0.0, 1.0);
        Point2D {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
        }
    }
}

/// Named hand landmarks in detector order.
///
/// The discriminant is the landmark's index in the pose array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum LandmarkId {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl LandmarkId {
    /// Index of this landmark in the pose array.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single hand's landmarks for one frame.
///
/// Exactly one hand per frame; frames without a detected hand carry no
/// `HandPose` at all (see [`crate::frame::PoseFrame`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandPose {
    /// Landmark positions indexed by [`LandmarkId`].
    pub points: [Point2D; LANDMARK_COUNT],
}

impl HandPose {
    /// Build a pose from a full landmark array.
    pub fn new(points: [Point2D; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Position of a named landmark.
    pub fn point(&self, id: LandmarkId) -> Point2D {
        self.points[id.index()]
    }

    /// Palm reference point used for cursor motion (middle-finger MCP,
    /// the stable knuckle at the palm center).
    pub fn palm_center(&self) -> Point2D {
        self.point(LandmarkId::MiddleMcp)
    }

    /// Normalized hand-scale reference: wrist to middle-finger PIP.
    ///
    /// Used to normalize pinch distance so click sensitivity does not
    /// depend on hand-to-camera distance.
    pub fn hand_size(&self) -> f64 {
        self.point(LandmarkId::Wrist)
            .distance_to(&self.point(LandmarkId::MiddlePip))
    }
}
