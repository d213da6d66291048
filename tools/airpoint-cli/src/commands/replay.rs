//! Replay a recorded pose stream through the gesture engine.

use std::path::PathBuf;

use airpoint_common::config::EngineDefaults;
use airpoint_gesture_core::{ControlSession, EngineConfig, ReplaySource, ScreenSize, VirtualPointer};
use airpoint_hand_model::frame::{parse_frames, parse_header};
use airpoint_hand_model::intent::IntentWriter;

/// Engine tunable overrides from the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub sensitivity: Option<f64>,
    pub smoothing: Option<f64>,
    pub click_threshold: Option<f64>,
    pub timeout: Option<f64>,
}

pub fn run(
    stream: PathBuf,
    output: Option<PathBuf>,
    width: u32,
    height: u32,
    overrides: Overrides,
    defaults: &EngineDefaults,
) -> anyhow::Result<()> {
    println!("Replaying pose stream: {}", stream.display());

    let content = std::fs::read_to_string(&stream)
        .map_err(|_| anyhow::anyhow!("Stream file not found: {}", stream.display()))?;

    if let Some(header) = parse_header(&content) {
        println!("  Source: {} ({} Hz)", header.source, header.frame_rate_hz);
        println!("  Recorded: {}", header.epoch_wall);
    }

    let frames =
        parse_frames(&content).map_err(|e| anyhow::anyhow!("Failed to parse stream: {e}"))?;
    println!("  Loaded {} frames", frames.len());

    if frames.is_empty() {
        println!("  Nothing to replay.");
        return Ok(());
    }

    let mut config = EngineConfig::from(defaults);
    if let Some(v) = overrides.sensitivity {
        config.sensitivity = v;
    }
    if let Some(v) = overrides.smoothing {
        config.smoothing_factor = v;
    }
    if let Some(v) = overrides.click_threshold {
        config.click_threshold = v;
    }
    if let Some(v) = overrides.timeout {
        config.activation_timeout_secs = v;
    }

    let screen = ScreenSize::new(width as f64, height as f64);
    let mut session = ControlSession::new(&config, screen);
    let mut source = ReplaySource::new(frames, stream.display().to_string());
    // Cursor starts at screen center, as a fresh desktop session would
    let mut sink = VirtualPointer::new(screen.width / 2.0, screen.height / 2.0);

    let summary = session.run(&mut source, &mut sink)?;

    println!("  Frames processed: {}", summary.frames);
    println!("  Frames with hand: {}", summary.frames_with_pose);
    println!(
        "  Activations: {} (deactivations: {})",
        summary.activations, summary.deactivations
    );
    println!("  Moves: {}", summary.moves);
    println!("  Clicks: {}", summary.clicks);
    println!(
        "  Final cursor: ({:.1}, {:.1}), control {}",
        sink.x,
        sink.y,
        if session.controller().is_active() {
            "armed"
        } else {
            "disarmed"
        }
    );

    if let Some(out) = output {
        let mut writer = IntentWriter::new(out)?;
        for intent in session.intents() {
            writer.write_intent(intent)?;
        }
        writer.flush()?;
        println!(
            "  Wrote {} intents to {}",
            writer.intents_written(),
            writer.path().display()
        );
    }

    Ok(())
}
