//! End-to-end session scenarios: activation sequence, timeout, motion,
//! pinch click, and hand-loss recovery, driven through `ControlSession`.

use airpoint_gesture_core::{
    ClickDecision, ControlSession, EngineConfig, ReplaySource, ScreenSize, VirtualPointer,
};
use airpoint_hand_model::frame::PoseFrame;
use airpoint_hand_model::intent::IntentKind;
use airpoint_hand_model::landmark::{HandPose, LandmarkId, Point2D, LANDMARK_COUNT};

const SCREEN: ScreenSize = ScreenSize {
    width: 1920.0,
    height: 1080.0,
};

fn set(pose: &mut HandPose, id: LandmarkId, x: f64, y: f64) {
    pose.points[id.index()] = Point2D::new(x, y);
}

/// A hand at the given palm position with no gesture flags set and the
/// thumb/index tips held apart (no pinch).
fn tracking_pose(palm_x: f64, palm_y: f64) -> HandPose {
    let mut pose = HandPose::new([Point2D::new(palm_x, palm_y); LANDMARK_COUNT]);
    set(&mut pose, LandmarkId::Wrist, palm_x, palm_y + 0.3);
    set(&mut pose, LandmarkId::MiddlePip, palm_x, palm_y - 0.1);
    set(&mut pose, LandmarkId::ThumbTip, palm_x - 0.2, palm_y);
    set(&mut pose, LandmarkId::IndexTip, palm_x + 0.2, palm_y);
    pose
}

/// Same hand with thumb and index tips pinched together.
fn pinch_pose(palm_x: f64, palm_y: f64) -> HandPose {
    let mut pose = tracking_pose(palm_x, palm_y);
    set(&mut pose, LandmarkId::ThumbTip, palm_x - 0.002, palm_y);
    set(&mut pose, LandmarkId::IndexTip, palm_x + 0.002, palm_y);
    pose
}

fn thumbs_up_pose() -> HandPose {
    let mut pose = tracking_pose(0.5, 0.5);
    set(&mut pose, LandmarkId::ThumbIp, 0.4, 0.5);
    set(&mut pose, LandmarkId::ThumbTip, 0.4, 0.3);
    set(&mut pose, LandmarkId::IndexPip, 0.5, 0.5);
    set(&mut pose, LandmarkId::IndexTip, 0.5, 0.6);
    set(&mut pose, LandmarkId::MiddlePip, 0.55, 0.5);
    set(&mut pose, LandmarkId::MiddleTip, 0.55, 0.6);
    pose
}

fn splayed_pose() -> HandPose {
    let mut pose = tracking_pose(0.5, 0.5);
    for (tip, pip) in [
        (LandmarkId::IndexTip, LandmarkId::IndexPip),
        (LandmarkId::MiddleTip, LandmarkId::MiddlePip),
        (LandmarkId::RingTip, LandmarkId::RingPip),
        (LandmarkId::PinkyTip, LandmarkId::PinkyPip),
    ] {
        set(&mut pose, pip, 0.5, 0.5);
        set(&mut pose, tip, 0.5, 0.3);
    }
    pose
}

fn secs(s: f64) -> u64 {
    (s * 1_000_000_000.0) as u64
}

#[test]
fn activation_within_timeout_arms_and_tracks() {
    let mut session = ControlSession::new(&EngineConfig::default(), SCREEN);
    let mut sink = VirtualPointer::new(960.0, 540.0);

    let frames = vec![
        PoseFrame::with_pose(secs(0.0), thumbs_up_pose()),
        PoseFrame::with_pose(secs(0.2), tracking_pose(0.5, 0.5)),
        PoseFrame::with_pose(secs(0.4), splayed_pose()),
        PoseFrame::with_pose(secs(0.5), tracking_pose(0.5, 0.5)),
        PoseFrame::with_pose(secs(0.6), tracking_pose(0.53, 0.5)),
        PoseFrame::with_pose(secs(0.7), tracking_pose(0.56, 0.5)),
    ];
    let mut source = ReplaySource::new(frames, "scenario");

    let summary = session.run(&mut source, &mut sink).unwrap();

    assert!(session.controller().is_active());
    assert_eq!(summary.activations, 1);
    assert_eq!(summary.deactivations, 0);
    // The splayed activation frame only primes; the three tracking
    // frames each emit a move
    assert_eq!(summary.moves, 3);
    assert!(sink.x > 960.0, "cursor should have moved right");
    assert_eq!(sink.y, 540.0);
}

#[test]
fn late_palm_does_not_activate() {
    let mut session = ControlSession::new(&EngineConfig::default(), SCREEN);
    let mut sink = VirtualPointer::new(960.0, 540.0);

    let frames = vec![
        PoseFrame::with_pose(secs(0.0), thumbs_up_pose()),
        PoseFrame::with_pose(secs(2.0), splayed_pose()),
        PoseFrame::with_pose(secs(2.1), tracking_pose(0.6, 0.6)),
    ];
    let mut source = ReplaySource::new(frames, "late-palm");

    let summary = session.run(&mut source, &mut sink).unwrap();

    assert!(!session.controller().is_active());
    assert_eq!(summary.activations, 0);
    assert_eq!(summary.moves, 0);
    assert_eq!(sink.moves, 0);
}

#[test]
fn pinch_clicks_exactly_once() {
    let mut session = ControlSession::new(&EngineConfig::default(), SCREEN);
    let mut sink = VirtualPointer::new(960.0, 540.0);

    let frames = vec![
        PoseFrame::with_pose(secs(0.0), thumbs_up_pose()),
        PoseFrame::with_pose(secs(0.2), splayed_pose()),
        PoseFrame::with_pose(secs(0.3), tracking_pose(0.5, 0.5)),
        // Pinch held over three frames, then released
        PoseFrame::with_pose(secs(0.4), pinch_pose(0.5, 0.5)),
        PoseFrame::with_pose(secs(0.5), pinch_pose(0.5, 0.5)),
        PoseFrame::with_pose(secs(0.6), pinch_pose(0.5, 0.5)),
        PoseFrame::with_pose(secs(0.7), tracking_pose(0.5, 0.5)),
        // A second pinch clicks again
        PoseFrame::with_pose(secs(0.8), pinch_pose(0.5, 0.5)),
    ];
    let mut source = ReplaySource::new(frames, "pinch");

    let summary = session.run(&mut source, &mut sink).unwrap();

    assert_eq!(summary.clicks, 2);
    assert_eq!(sink.clicks, 2);

    let click_count = session
        .intents()
        .iter()
        .filter(|i| i.kind == IntentKind::Click)
        .count();
    assert_eq!(click_count, 2);
}

#[test]
fn hand_loss_while_active_does_not_jump() {
    let mut session = ControlSession::new(&EngineConfig::default(), SCREEN);
    let mut sink = VirtualPointer::new(960.0, 540.0);

    let frames = vec![
        PoseFrame::with_pose(secs(0.0), thumbs_up_pose()),
        PoseFrame::with_pose(secs(0.2), splayed_pose()),
        PoseFrame::with_pose(secs(0.3), tracking_pose(0.5, 0.5)),
        // Hand disappears, then reappears on the far side of the frame
        PoseFrame::empty(secs(0.4)),
        PoseFrame::empty(secs(0.5)),
        PoseFrame::with_pose(secs(0.6), tracking_pose(0.9, 0.9)),
        PoseFrame::with_pose(secs(0.7), tracking_pose(0.91, 0.9)),
    ];
    let mut source = ReplaySource::new(frames, "hand-loss");

    session.run(&mut source, &mut sink).unwrap();

    assert!(session.controller().is_active());
    // The reacquisition frame re-primes instead of applying the huge
    // 0.5 → 0.9 palm delta; only the small 0.01 delta afterwards moves
    // the cursor
    let max_small_step = 0.011 * SCREEN.width * 2.5;
    assert!(
        (sink.x - 960.0).abs() < max_small_step,
        "cursor jumped after hand loss: {}",
        sink.x
    );
}

#[test]
fn second_sequence_disarms() {
    let mut session = ControlSession::new(&EngineConfig::default(), SCREEN);
    let mut sink = VirtualPointer::new(960.0, 540.0);

    let frames = vec![
        PoseFrame::with_pose(secs(0.0), thumbs_up_pose()),
        PoseFrame::with_pose(secs(0.2), splayed_pose()),
        PoseFrame::with_pose(secs(0.3), tracking_pose(0.5, 0.5)),
        PoseFrame::with_pose(secs(1.0), thumbs_up_pose()),
        PoseFrame::with_pose(secs(1.2), splayed_pose()),
        // Inactive again: motion must stop
        PoseFrame::with_pose(secs(1.3), tracking_pose(0.7, 0.7)),
        PoseFrame::with_pose(secs(1.4), tracking_pose(0.8, 0.8)),
    ];
    let mut source = ReplaySource::new(frames, "disarm");

    let summary = session.run(&mut source, &mut sink).unwrap();

    assert!(!session.controller().is_active());
    assert_eq!(summary.activations, 1);
    assert_eq!(summary.deactivations, 1);

    let moves_after = session
        .intents()
        .iter()
        .filter(|i| i.timestamp_ns > secs(1.2))
        .count();
    assert_eq!(moves_after, 0);
}

#[test]
fn no_click_decision_leaks_while_inactive() {
    let mut session = ControlSession::new(&EngineConfig::default(), SCREEN);
    let mut sink = VirtualPointer::new(0.0, 0.0);

    // Pinching without ever activating must not click
    let frames = vec![
        PoseFrame::with_pose(secs(0.0), pinch_pose(0.5, 0.5)),
        PoseFrame::with_pose(secs(0.1), pinch_pose(0.5, 0.5)),
    ];
    let mut source = ReplaySource::new(frames, "inactive-pinch");

    let summary = session.run(&mut source, &mut sink).unwrap();
    assert_eq!(summary.clicks, 0);
    assert_eq!(sink.clicks, 0);
}

#[test]
fn outcome_click_matches_decision_type() {
    // ClickDecision is re-exported for observers; sanity-check variants
    assert_ne!(ClickDecision::Press, ClickDecision::Release);
    assert_ne!(ClickDecision::Press, ClickDecision::None);
}
