//! Coprocessor runtime around the tape-target decision pipeline.
//!
//! Owns the collaborator surfaces the pure pipeline stays away from:
//! parsing the `/boot/frc.json`-style configuration, the output table the
//! readings are published to, and the per-camera worker plus publisher
//! threads that move data between them. Capture devices, MJPEG relays and
//! the network-table session itself live in external collaborators.

mod config;
mod sink;
mod worker;

pub use config::{CameraConfig, ConfigError, NtMode, VisionConfig};
pub use sink::{
    spawn_publisher, OutputTable, ReadingSink, KEY_ANGLE, KEY_DISTANCE, KEY_DISTANCE_RIGHT,
    PUBLISH_QUEUE_DEPTH,
};
pub use worker::{frame_channel, spawn_worker, FrameCandidates, WorkerStats};
