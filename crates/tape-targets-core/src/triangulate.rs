//! Distance and lateral-offset estimation from a selected target pair.
//!
//! Two estimators run on every pair, each triangulating a known physical
//! extent against its angular subtense: the width estimator uses the strip
//! separation across the horizontal field of view, the height estimator the
//! strip height across the vertical one. The consistency gate compares the
//! two before anything is trusted.

use crate::error::FrameSkip;
use crate::geometry::TargetGeometry;
use crate::types::{FrameGeometry, TargetPair, Triangulation};

/// Convert a pair's pixel geometry into physical estimates.
///
/// Pure arithmetic; the only failure is a zero pixel separation, which
/// skips the frame rather than dividing by it.
pub fn triangulate(
    pair: &TargetPair,
    frame: FrameGeometry,
    geometry: &TargetGeometry,
) -> Result<Triangulation, FrameSkip> {
    let pixel_separation = pair.pixel_separation();
    if pixel_separation == 0.0 {
        return Err(FrameSkip::DegeneratePair);
    }

    let inches_per_pixel = geometry.separation_in / pixel_separation;

    let subtense = pixel_separation / frame.width() * geometry.hfov_rad;
    let distance_by_width_in = (geometry.separation_in / 2.0) / (subtense / 2.0).tan();

    let midpoint_x = (pair.left.center_x() + pair.right.center_x()) / 2.0;
    let lateral_offset_in = (midpoint_x - frame.width() / 2.0) * inches_per_pixel;

    let height_px = (pair.left.height + pair.right.height) / 2.0;
    let vertical_subtense = height_px / frame.height() * geometry.vfov_rad;
    let distance_by_height_in = (geometry.tape_height_in / 2.0) / (vertical_subtense / 2.0).tan();

    Ok(Triangulation {
        distance_by_width_in,
        distance_by_height_in,
        lateral_offset_in,
    })
}
