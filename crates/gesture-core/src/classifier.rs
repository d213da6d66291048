//! Gesture classification: pose snapshot → gesture flags.
//!
//! The default classifier uses tip-above-joint heuristics on landmark
//! y-coordinates (image y grows downward). These are orientation
//! sensitive: they assume the user faces the camera with the hand
//! upright. That is a documented limitation of the heuristic, not a
//! bug; alternative classifiers (e.g., joint-angle based) can be
//! swapped in behind the [`GestureClassifier`] trait without touching
//! the activation state machine.

use airpoint_hand_model::landmark::{HandPose, LandmarkId};

/// Boolean gesture flags derived from one pose snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureFlags {
    /// Thumb extended upward, other fingers curled.
    pub thumb_up: bool,

    /// All four non-thumb fingers fully extended.
    pub palm_splayed: bool,
}

/// Strategy trait for mapping a pose to gesture flags.
///
/// Implementations must be pure: no side effects, no retained state.
pub trait GestureClassifier {
    fn classify(&self, pose: &HandPose) -> GestureFlags;
}

/// Default classifier: compares finger-tip y against joint y.
///
/// Strict inequalities throughout; a tip exactly level with its joint
/// does not satisfy either gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct TipAboveJointClassifier;

impl TipAboveJointClassifier {
    fn thumb_up(pose: &HandPose) -> bool {
        let thumb_extended =
            pose.point(LandmarkId::ThumbTip).y < pose.point(LandmarkId::ThumbIp).y;
        let fingers_curled = pose.point(LandmarkId::IndexTip).y
            > pose.point(LandmarkId::IndexPip).y
            && pose.point(LandmarkId::MiddleTip).y > pose.point(LandmarkId::MiddlePip).y;
        thumb_extended && fingers_curled
    }

    fn palm_splayed(pose: &HandPose) -> bool {
        let extended = |tip: LandmarkId, pip: LandmarkId| pose.point(tip).y < pose.point(pip).y;
        extended(LandmarkId::IndexTip, LandmarkId::IndexPip)
            && extended(LandmarkId::MiddleTip, LandmarkId::MiddlePip)
            && extended(LandmarkId::RingTip, LandmarkId::RingPip)
            && extended(LandmarkId::PinkyTip, LandmarkId::PinkyPip)
    }
}

impl GestureClassifier for TipAboveJointClassifier {
    fn classify(&self, pose: &HandPose) -> GestureFlags {
        GestureFlags {
            thumb_up: Self::thumb_up(pose),
            palm_splayed: Self::palm_splayed(pose),
        }
    }
}
