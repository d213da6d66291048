//! AirPoint CLI — replay, validate, and synthesize hand-pose streams.
//!
//! Usage:
//!   airpoint replay <STREAM>     Run a recorded pose stream through the engine
//!   airpoint validate <STREAM>   Validate a pose-stream file
//!   airpoint synth <OUT>         Generate a synthetic pose stream

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use airpoint_common::config::AppConfig;
use airpoint_common::logging::init_logging;

mod commands;

#[derive(Parser)]
#[command(
    name = "airpoint",
    about = "Hand-gesture pointer control: replay and inspect pose streams",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a recorded pose stream through the gesture engine
    Replay {
        /// Path to the pose-stream JSONL file
        stream: PathBuf,

        /// Write emitted pointer intents to this JSONL file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Screen width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Screen height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,

        /// Motion gain override (default from config)
        #[arg(long)]
        sensitivity: Option<f64>,

        /// Smoothing factor override, [0.0, 1.0)
        #[arg(long)]
        smoothing: Option<f64>,

        /// Pinch click threshold override
        #[arg(long)]
        click_threshold: Option<f64>,

        /// Activation timeout override (seconds)
        #[arg(long)]
        timeout: Option<f64>,
    },

    /// Validate a pose-stream file
    Validate {
        /// Path to the pose-stream JSONL file
        stream: PathBuf,
    },

    /// Generate a synthetic pose stream exercising the full gesture set
    Synth {
        /// Output path for the generated stream
        out: PathBuf,

        /// Frame rate of the generated stream (Hz)
        #[arg(long, default_value = "30")]
        fps: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    init_logging(&config.logging);

    match cli.command {
        Commands::Replay {
            stream,
            output,
            width,
            height,
            sensitivity,
            smoothing,
            click_threshold,
            timeout,
        } => commands::replay::run(
            stream,
            output,
            width,
            height,
            commands::replay::Overrides {
                sensitivity,
                smoothing,
                click_threshold,
                timeout,
            },
            &config.engine,
        ),
        Commands::Validate { stream } => commands::validate::run(stream),
        Commands::Synth { out, fps } => commands::synth::run(out, fps),
    }
}
