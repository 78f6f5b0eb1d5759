use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned candidate region in pixel coordinates, top-left origin.
///
/// Produced fresh each frame by the upstream contour detector; this crate
/// only ever reads it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Geometric center of the box.
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Horizontal center coordinate.
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Fixed capture resolution for a session.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FrameGeometry {
    pub width_px: u32,
    pub height_px: u32,
}

impl FrameGeometry {
    #[inline]
    pub fn width(&self) -> f64 {
        f64::from(self.width_px)
    }

    #[inline]
    pub fn height(&self) -> f64 {
        f64::from(self.height_px)
    }

    /// Center of the frame in pixel coordinates.
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width() / 2.0, self.height() / 2.0)
    }
}

/// Two distinct candidate boxes chosen from one frame, ordered by center-x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPair {
    /// Member with the smaller horizontal center.
    pub left: BoundingBox,
    /// Member with the larger horizontal center.
    pub right: BoundingBox,
}

impl TargetPair {
    /// Build a pair from two boxes, assigning left/right by center-x.
    /// Equal centers keep the argument order.
    pub fn ordered(a: BoundingBox, b: BoundingBox) -> Self {
        if b.center_x() < a.center_x() {
            Self { left: b, right: a }
        } else {
            Self { left: a, right: b }
        }
    }

    /// Horizontal distance between the two box centers, in pixels.
    ///
    /// Non-negative by construction; zero when the centers coincide.
    #[inline]
    pub fn pixel_separation(&self) -> f64 {
        self.right.center_x() - self.left.center_x()
    }
}

/// Per-frame distance and offset estimates. Ephemeral, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangulation {
    /// Distance from the angular subtense of the pair's horizontal span.
    pub distance_by_width_in: f64,
    /// Distance from the apparent tape height, independent of the above.
    pub distance_by_height_in: f64,
    /// Signed offset of the pair midpoint from the frame center;
    /// positive means the target sits right of center.
    pub lateral_offset_in: f64,
}

/// Angle value carried by [`Reading::SENTINEL`].
///
/// A real bearing lives in `[-π, π]`, so a full turn is unambiguously
/// out of range.
pub const ANGLE_SENTINEL_RAD: f64 = std::f64::consts::TAU;

/// The published triple. Computed once per accepted frame, published once,
/// then discarded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Distance to the target in inches; `-1` flags an untrusted frame.
    pub distance_in: f64,
    /// Signed lateral offset in inches, positive to the right of center.
    pub lateral_offset_in: f64,
    /// Bearing to the target. Reserved: always `0` on accepted readings,
    /// [`ANGLE_SENTINEL_RAD`] on the sentinel.
    pub angle_rad: f64,
}

impl Reading {
    /// "No reliable reading this frame" marker, distinct from not
    /// publishing at all.
    pub const SENTINEL: Reading = Reading {
        distance_in: -1.0,
        lateral_offset_in: 0.0,
        angle_rad: ANGLE_SENTINEL_RAD,
    };

    /// Accepted reading for a trusted frame.
    pub fn accepted(distance_in: f64, lateral_offset_in: f64) -> Self {
        Self {
            distance_in,
            lateral_offset_in,
            angle_rad: 0.0,
        }
    }

    /// Whether this value is the sentinel rather than a measurement.
    pub fn is_sentinel(&self) -> bool {
        self.distance_in < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_assigns_left_and_right_by_center() {
        let a = BoundingBox {
            x: 100.0,
            y: 0.0,
            width: 20.0,
            height: 40.0,
        };
        let b = BoundingBox {
            x: 10.0,
            y: 0.0,
            width: 20.0,
            height: 40.0,
        };

        let pair = TargetPair::ordered(a, b);
        assert_eq!(pair.left, b);
        assert_eq!(pair.right, a);
        assert!(pair.pixel_separation() > 0.0);

        // Same boxes in the other order give the same pair.
        assert_eq!(TargetPair::ordered(b, a), pair);
    }

    #[test]
    fn equal_centers_keep_argument_order() {
        let a = BoundingBox {
            x: 50.0,
            y: 0.0,
            width: 10.0,
            height: 30.0,
        };
        let b = BoundingBox {
            x: 45.0,
            y: 0.0,
            width: 20.0,
            height: 32.0,
        };
        assert_eq!(a.center_x(), b.center_x());

        let pair = TargetPair::ordered(a, b);
        assert_eq!(pair.left, a);
        assert_eq!(pair.right, b);
        assert_eq!(pair.pixel_separation(), 0.0);
    }

    #[test]
    fn sentinel_is_recognized() {
        assert!(Reading::SENTINEL.is_sentinel());
        assert!(!Reading::accepted(95.0, -3.2).is_sentinel());
        assert_eq!(Reading::accepted(95.0, -3.2).angle_rad, 0.0);
    }
}
