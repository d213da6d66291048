//! Generate a synthetic pose stream with known gesture content.
//!
//! The generated stream walks through the whole gesture vocabulary at
//! known frame ranges: idle hand, activation sequence, a palm sweep,
//! a pinch-and-release, a hand-loss gap, and the deactivation
//! sequence. Useful as a replay fixture and for eyeballing engine
//! tunables without a camera.

use std::path::PathBuf;

use airpoint_common::clock::SessionClock;
use airpoint_hand_model::frame::{serialize_stream, PoseFrame, PoseStreamHeader};
use airpoint_hand_model::landmark::{HandPose, LandmarkId, Point2D, LANDMARK_COUNT};

pub fn run(out: PathBuf, fps: u32) -> anyhow::Result<()> {
    if fps == 0 {
        anyhow::bail!("fps must be at least 1");
    }

    println!("Generating synthetic pose stream at {fps} Hz");

    let frame_ns = 1_000_000_000u64 / fps as u64;
    let mut frames: Vec<PoseFrame> = vec![];
    let mut t: u64 = 0;
    let push = |frames: &mut Vec<PoseFrame>, pose: Option<HandPose>, t: &mut u64| {
        frames.push(PoseFrame {
            timestamp_ns: *t,
            pose,
        });
        *t += frame_ns;
    };

    // Half a second of a visible but idle hand
    for _ in 0..fps / 2 {
        push(&mut frames, Some(tracking_pose(0.5, 0.5)), &mut t);
    }

    // Activation: thumbs-up, short pause, splayed palm
    for _ in 0..fps / 4 {
        push(&mut frames, Some(thumbs_up_pose()), &mut t);
    }
    for _ in 0..fps / 10 {
        push(&mut frames, Some(tracking_pose(0.5, 0.5)), &mut t);
    }
    for _ in 0..fps / 4 {
        push(&mut frames, Some(splayed_pose()), &mut t);
    }

    // One second of a rightward palm sweep
    for i in 0..fps {
        let x = 0.5 + 0.2 * (i as f64 / fps as f64);
        push(&mut frames, Some(tracking_pose(x, 0.5)), &mut t);
    }

    // Pinch held for a quarter second, then released
    for _ in 0..fps / 4 {
        push(&mut frames, Some(pinch_pose(0.7, 0.5)), &mut t);
    }
    for _ in 0..fps / 4 {
        push(&mut frames, Some(tracking_pose(0.7, 0.5)), &mut t);
    }

    // Hand leaves the frame, reappears elsewhere
    for _ in 0..fps / 2 {
        push(&mut frames, None, &mut t);
    }
    for _ in 0..fps / 2 {
        push(&mut frames, Some(tracking_pose(0.3, 0.6)), &mut t);
    }

    // Deactivation sequence
    for _ in 0..fps / 4 {
        push(&mut frames, Some(thumbs_up_pose()), &mut t);
    }
    for _ in 0..fps / 4 {
        push(&mut frames, Some(splayed_pose()), &mut t);
    }

    let clock = SessionClock::start();
    let header = PoseStreamHeader::new(clock.epoch_wall(), fps, "airpoint-synth");
    let jsonl = serialize_stream(&header, &frames)?;

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, jsonl)?;

    println!("  Wrote {} frames to {}", frames.len(), out.display());
    Ok(())
}

fn set(pose: &mut HandPose, id: LandmarkId, x: f64, y: f64) {
    pose.points[id.index()] = Point2D::new(x, y);
}

/// A hand at the given palm position with no gesture flags and the
/// thumb/index tips held apart.
fn tracking_pose(palm_x: f64, palm_y: f64) -> HandPose {
    let mut pose = HandPose::new([Point2D::new(palm_x, palm_y); LANDMARK_COUNT]);
    set(&mut pose, LandmarkId::Wrist, palm_x, palm_y + 0.3);
    set(&mut pose, LandmarkId::MiddlePip, palm_x, palm_y - 0.1);
    set(&mut pose, LandmarkId::ThumbTip, palm_x - 0.2, palm_y);
    set(&mut pose, LandmarkId::IndexTip, palm_x + 0.2, palm_y);
    pose
}

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
