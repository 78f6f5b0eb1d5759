//! Startup-time derivation of the physical constants used by triangulation.
//!
//! All user-facing angles are degrees; everything past this boundary is
//! radians. Linear quantities are inches throughout.

use serde::{Deserialize, Serialize};

use crate::types::FrameGeometry;

/// User-facing description of the tape targets and camera optics.
///
/// `Default` matches the 2019 field: two 5.5 in × 2 in strips tilted 14°
/// off vertical, inner tips 8 in apart, viewed through a 78° lens.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetSpec {
    /// Tilt of each tape strip away from vertical, degrees.
    pub tape_tilt_deg: f64,
    /// Long side of one tape strip, inches.
    pub tape_length_in: f64,
    /// Short side of one tape strip, inches.
    pub tape_width_in: f64,
    /// Gap between the top inner tips of the two strips, inches.
    pub tip_gap_in: f64,
    /// Horizontal field of view of the camera, degrees.
    pub horizontal_fov_deg: f64,
    /// Vertical field of view of the camera, degrees.
    pub vertical_fov_deg: f64,
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self {
            tape_tilt_deg: 14.0,
            tape_length_in: 5.5,
            tape_width_in: 2.0,
            tip_gap_in: 8.0,
            horizontal_fov_deg: 78.0,
            // 16:9 sensor behind the same lens.
            vertical_fov_deg: 78.0 * 9.0 / 16.0,
        }
    }
}

/// Malformed target or camera specification. Fatal at startup; never
/// raised while processing frames.
#[derive(thiserror::Error, Debug)]
pub enum GeometryError {
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },
    #[error("{name} must lie in (0, 180) degrees, got {value}")]
    FieldOfViewRange { name: &'static str, value: f64 },
    #[error("frame resolution must be non-zero, got {width_px}x{height_px}")]
    EmptyFrame { width_px: u32, height_px: u32 },
}

/// Immutable constants consumed by every triangulation, derived once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetGeometry {
    /// Tape tilt, radians.
    pub tilt_rad: f64,
    /// Horizontal field of view, radians.
    pub hfov_rad: f64,
    /// Vertical field of view, radians.
    pub vfov_rad: f64,
    /// Center-to-center separation of the two strips, inches.
    pub separation_in: f64,
    /// Height of one strip's bounding rectangle, inches.
    pub tape_height_in: f64,
}

impl TargetGeometry {
    /// Derive the constant set from a spec and the session resolution.
    ///
    /// The per-strip bounding rectangle of a strip of length `l` and width
    /// `w` tilted by `t` is `l·sin t + w·cos t` wide and `l·cos t + w·sin t`
    /// tall; the strip centers sit one bounding width plus the tip gap
    /// apart.
    pub fn derive(spec: &TargetSpec, frame: FrameGeometry) -> Result<Self, GeometryError> {
        if frame.width_px == 0 || frame.height_px == 0 {
            return Err(GeometryError::EmptyFrame {
                width_px: frame.width_px,
                height_px: frame.height_px,
            });
        }

        check_positive("tape_length_in", spec.tape_length_in)?;
        check_positive("tape_width_in", spec.tape_width_in)?;
        check_positive("tip_gap_in", spec.tip_gap_in)?;
        check_fov("horizontal_fov_deg", spec.horizontal_fov_deg)?;
        check_fov("vertical_fov_deg", spec.vertical_fov_deg)?;

        let tilt_rad = spec.tape_tilt_deg.to_radians();
        let bound_width =
            spec.tape_length_in * tilt_rad.sin() + spec.tape_width_in * tilt_rad.cos();
        let bound_height =
            spec.tape_length_in * tilt_rad.cos() + spec.tape_width_in * tilt_rad.sin();

        Ok(Self {
            tilt_rad,
            hfov_rad: spec.horizontal_fov_deg.to_radians(),
            vfov_rad: spec.vertical_fov_deg.to_radians(),
            separation_in: bound_width + spec.tip_gap_in,
            tape_height_in: bound_height,
        })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::NonPositiveDimension { name, value })
    }
}

fn check_fov(name: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 && value < 180.0 {
        Ok(())
    } else {
        Err(GeometryError::FieldOfViewRange { name, value })
    }
}
