//! High-level facade for the `tape-targets-*` workspace.
//!
//! Per-frame selection, triangulation and cross-validation of
//! retro-reflective tape target pairs, plus the coprocessor runtime that
//! feeds the pipeline and publishes its readings.
//!
//! ## Quickstart
//!
//! ```
//! use tape_targets::{BoundingBox, FrameGeometry, FramePipeline, GateParams, TargetSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frame = FrameGeometry { width_px: 1920, height_px: 1080 };
//! let pipeline = FramePipeline::new(&TargetSpec::default(), frame, GateParams::default())?;
//!
//! let candidates = [
//!     BoundingBox { x: 870.0, y: 480.0, width: 20.0, height: 83.0 },
//!     BoundingBox { x: 1030.0, y: 480.0, width: 20.0, height: 83.0 },
//! ];
//! if let Some(reading) = pipeline.process(&candidates) {
//!     println!("distance: {:.1} in", reading.distance_in);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`core`](tape_targets_core): pipeline stages and geometry types.
//! - [`runtime`](tape_targets_runtime): configuration file parsing, the
//!   output table, and worker/publisher threads.

pub use tape_targets_core as core;
pub use tape_targets_runtime as runtime;

pub use tape_targets_core::{
    init_with_level, BoundingBox, FramePipeline, FrameGeometry, FrameSkip, GateParams,
    GeometryError, Reading, TargetGeometry, TargetPair, TargetSpec, Triangulation,
    ANGLE_SENTINEL_RAD,
};
pub use tape_targets_runtime::{OutputTable, ReadingSink, VisionConfig};
