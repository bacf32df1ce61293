//! Facepipe CLI
//!
//! Usage:
//!   facepipe                         # stdin lines → frame JSON on stdout
//!   facepipe --fps 60                # custom frame rate
//!   facepipe --seed 7 --quiet        # fixed blink seed, no stderr banner
//!
//! Frames keep flowing during silence; idle behaviors need ticking.

use clap::Parser;
use colored::Colorize;
use std::time::{Duration, Instant};
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;

use facepipe::core::{Pipeline, PipelineConfig};
use facepipe::{DEFAULT_FPS, DEFAULT_IDLE_SEED, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "facepipe",
    version = VERSION,
    about = "Facepipe - streaming text to facial-animation control frames",
    long_about = "Facepipe reads a text stream on stdin (optionally carrying\n\
                  <af:expression:intensity> markers), estimates ambient sentiment\n\
                  from the clean text, and emits one JSON MocapFrame line per\n\
                  frame on stdout at a steady rate.\n\n\
                  Markers:\n  \
                  <af:happy>           full-strength expression\n  \
                  <af:sad:0.4>         weighted expression\n\n\
                  Expressions: happy, sad, thinking, surprised, confused,\n\
                  angry, neutral, talking"
)]
struct Args {
    /// Target frames per second
    #[arg(short, long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Seed for blink scheduling
    #[arg(long, default_value_t = DEFAULT_IDLE_SEED)]
    seed: u64,

    /// Suppress the stderr banner
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if !args.quiet {
        eprintln!("{}", format!("facepipe v{}", VERSION).bold());
        eprintln!(
            "{}",
            format!("{} fps, seed {} - frames on stdout, Ctrl-D to finish", args.fps, args.seed)
                .dimmed()
        );
    }

    run_stream(&args).await;

    if !args.quiet {
        eprintln!("{}", "stream ended".dimmed());
    }
}

/// Main loop: stdin lines feed the pipeline, a fixed-rate ticker drives it
async fn run_stream(args: &Args) {
    let mut pipeline = Pipeline::new(PipelineConfig {
        fps: args.fps,
        idle_seed: args.seed,
    });

    // Reader task so stdin never blocks the ticker
    let (tx, mut rx) = mpsc::channel::<String>(64);
    tokio::spawn(async move {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).await.is_err() {
                break;
            }
        }
    });

    let start = Instant::now();
    let mut last_tick = Instant::now();
    let mut ticker =
        tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1))));

    loop {
        tokio::select! {
            maybe_line = rx.recv() => match maybe_line {
                Some(line) => {
                    pipeline.feed(&line, start.elapsed().as_secs_f64());
                }
                None => break, // EOF
            },
            _ = ticker.tick() => {
                let now = Instant::now();
                let dt = now.duration_since(last_tick).as_secs_f64();
                last_tick = now;
                pipeline.step(dt, start.elapsed().as_secs_f64());
            }
        }
    }
}
