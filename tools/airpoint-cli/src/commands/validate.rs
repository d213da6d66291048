//! Validate a pose-stream file.

use std::path::PathBuf;

use airpoint_hand_model::frame::{parse_frames, parse_header};

pub fn run(stream: PathBuf) -> anyhow::Result<()> {
    println!("Validating pose stream: {}", stream.display());

    let content = std::fs::read_to_string(&stream)
        .map_err(|_| anyhow::anyhow!("Stream file not found: {}", stream.display()))?;

    let mut issues: Vec<String> = vec![];

    match parse_header(&content) {
        Some(header) => {
            println!("  Schema: {}", header.schema_version);
            println!("  Source: {} ({} Hz)", header.source, header.frame_rate_hz);
        }
        None => issues.push("Missing or unparseable header line".to_string()),
    }

    let frames =
        parse_frames(&content).map_err(|e| anyhow::anyhow!("Failed to parse stream: {e}"))?;
    println!("  Frames: {}", frames.len());

    if frames.is_empty() {
        issues.push("Stream contains no frames".to_string());
    } else {
        let with_pose = frames.iter().filter(|f| f.pose.is_some()).count();
        println!(
            "  Hand visible: {}/{} frames ({:.0}%)",
            with_pose,
            frames.len(),
            with_pose as f64 / frames.len() as f64 * 100.0
        );
        println!(
            "  Duration: {:.2}s",
            frames.last().unwrap().timestamp_secs() - frames[0].timestamp_secs()
        );

        let non_monotonic = frames
            .windows(2)
            .filter(|w| w[1].timestamp_ns < w[0].timestamp_ns)
            .count();
        if non_monotonic > 0 {
            issues.push(format!(
                "{non_monotonic} frame(s) with non-monotonic timestamps"
            ));
        }
    }

    if issues.is_empty() {
        println!("\nStream is valid.");
    } else {
        println!("\nValidation issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
        println!("\n{} issue(s) found.", issues.len());
    }

    Ok(())
}
