//! Replay recorded candidate frames through the vision pipeline.
//!
//! Stands in for the live contour detector: reads a JSON array of frames
//! (each an array of candidate bounding boxes), runs them through the
//! worker and publisher exactly as a camera feed would, and prints the
//! final output-table contents.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::{info, LevelFilter};

use tape_targets::runtime::{frame_channel, spawn_publisher, spawn_worker, OutputTable};
use tape_targets::{init_with_level, BoundingBox, FramePipeline, VisionConfig};

#[derive(Debug, Parser)]
#[command(name = "tape-targets", about = "Replay candidate frames through the tape-target pipeline")]
struct Args {
    /// Coprocessor configuration file.
    #[arg(long, default_value = "/boot/frc.json")]
    config: PathBuf,
    /// Recorded frames: a JSON array of frames, each an array of
    /// candidate bounding boxes.
    #[arg(long)]
    frames: PathBuf,
    /// Log per-frame diagnostics.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    init_with_level(level)?;

    let config = VisionConfig::load(&args.config)?;
    let camera = &config.cameras[0];
    let pipeline = FramePipeline::new(&config.target, camera.frame_geometry(), config.gate)?;

    let frames = load_frames(&args.frames)?;
    info!("replaying {} frame(s) from {}", frames.len(), args.frames.display());

    let table = Arc::new(OutputTable::new());
    let (reading_tx, publisher) = spawn_publisher(table.clone());
    let (frame_tx, frame_rx) = frame_channel(8);
    let worker = spawn_worker(camera.name.clone(), pipeline, reading_tx, frame_rx);

    for frame in frames {
        frame_tx.send(frame)?;
    }
    drop(frame_tx);

    let stats = worker.join().expect("worker thread");
    publisher.join().expect("publisher thread");

    println!(
        "{} frame(s): {} skipped, {} published",
        stats.processed, stats.skipped, stats.forwarded
    );
    match table.entries() {
        Some(entries) => {
            for (key, value) in entries {
                println!("{key} = {value:.3}");
            }
        }
        None => println!("no reading published"),
    }

    Ok(())
}

fn load_frames(path: &PathBuf) -> Result<Vec<Vec<BoundingBox>>, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
