//! Per-frame decision pipeline for retro-reflective tape target vision.
//!
//! Given the candidate bounding boxes an external contour detector found in
//! one frame, this crate selects the two most likely to be the true target
//! pair, triangulates distance and lateral offset with two independent
//! estimators, and cross-validates them before a reading is trusted. It is
//! purely geometric: no capture, no networking, no cross-frame state.

mod error;
mod gate;
mod geometry;
mod logger;
mod pipeline;
mod select;
mod triangulate;
mod types;

pub use error::FrameSkip;
pub use gate::GateParams;
pub use geometry::{GeometryError, TargetGeometry, TargetSpec};
pub use logger::init_with_level;
pub use pipeline::FramePipeline;
pub use select::select_pair;
pub use triangulate::triangulate;
pub use types::{
    BoundingBox, FrameGeometry, Reading, TargetPair, Triangulation, ANGLE_SENTINEL_RAD,
};
