//! Per-frame decision pipeline: select a pair, triangulate, cross-validate.

use log::debug;

use crate::error::FrameSkip;
use crate::gate::GateParams;
use crate::geometry::{GeometryError, TargetGeometry, TargetSpec};
use crate::select::select_pair;
use crate::triangulate::triangulate;
use crate::types::{BoundingBox, FrameGeometry, Reading};

/// One-shot-per-frame pipeline over the detector's candidate list.
///
/// Built once at startup; carries only immutable constants, so a frame's
/// outcome depends on nothing but that frame's candidates.
#[derive(Clone, Copy, Debug)]
pub struct FramePipeline {
    frame: FrameGeometry,
    geometry: TargetGeometry,
    gate: GateParams,
}

impl FramePipeline {
    /// Derive the geometry constants and assemble the pipeline.
    pub fn new(
        spec: &TargetSpec,
        frame: FrameGeometry,
        gate: GateParams,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            frame,
            geometry: TargetGeometry::derive(spec, frame)?,
            gate,
        })
    }

    #[inline]
    pub fn frame(&self) -> FrameGeometry {
        self.frame
    }

    #[inline]
    pub fn geometry(&self) -> &TargetGeometry {
        &self.geometry
    }

    /// Process one frame's candidates.
    ///
    /// `Some` carries exactly one publishable reading (accepted or the
    /// sentinel); `None` means the frame was skipped and nothing is
    /// published. Skips are local, never errors: the worker keeps going.
    pub fn process(&self, candidates: &[BoundingBox]) -> Option<Reading> {
        match self.run(candidates) {
            Ok(reading) => Some(reading),
            Err(skip) => {
                debug!("frame skipped: {skip}");
                None
            }
        }
    }

    fn run(&self, candidates: &[BoundingBox]) -> Result<Reading, FrameSkip> {
        let pair = select_pair(candidates, self.frame)?;
        let estimate = triangulate(&pair, self.frame, &self.geometry)?;
        Ok(self.gate.evaluate(&estimate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> FramePipeline {
        let frame = FrameGeometry {
            width_px: 1920,
            height_px: 1080,
        };
        FramePipeline::new(&TargetSpec::default(), frame, GateParams::default())
            .expect("valid spec")
    }

    fn tape(cx: f64, height: f64) -> BoundingBox {
        BoundingBox {
            x: cx - 10.0,
            y: 480.0,
            width: 20.0,
            height,
        }
    }

    #[test]
    fn insufficient_candidates_publish_nothing() {
        let pipeline = pipeline();
        assert_eq!(pipeline.process(&[]), None);
        assert_eq!(pipeline.process(&[tape(960.0, 60.0)]), None);
    }

    #[test]
    fn coincident_candidates_publish_nothing() {
        let pipeline = pipeline();
        assert_eq!(
            pipeline.process(&[tape(960.0, 60.0), tape(960.0, 58.0)]),
            None
        );
    }

    #[test]
    fn a_plausible_pair_produces_one_reading() {
        let pipeline = pipeline();
        // 160 px apart and ~83 px tall is what the pair looks like from
        // roughly 99 in out; both estimators land together.
        let reading = pipeline
            .process(&[tape(880.0, 83.0), tape(1040.0, 83.0)])
            .expect("reading");
        assert!(!reading.is_sentinel());
        assert!(reading.distance_in > 0.0);
        assert_eq!(reading.angle_rad, 0.0);
    }

    #[test]
    fn inconsistent_geometry_produces_the_sentinel() {
        let pipeline = pipeline();
        // Boxes far too tall for their separation: the height estimator
        // lands nowhere near the width estimator.
        let reading = pipeline
            .process(&[tape(880.0, 400.0), tape(1040.0, 400.0)])
            .expect("reading");
        assert_eq!(reading, Reading::SENTINEL);
    }

    #[test]
    fn processing_is_idempotent() {
        let pipeline = pipeline();
        let candidates = [tape(700.0, 55.0), tape(980.0, 57.0), tape(40.0, 90.0)];
        assert_eq!(pipeline.process(&candidates), pipeline.process(&candidates));
    }
}
