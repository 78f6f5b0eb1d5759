//! Target pair selection.
//!
//! A tracked target is steered toward the middle of the frame, so when the
//! detector reports more than two candidates the two closest to the frame
//! center are taken as the true pair. Squared distances are enough for the
//! ranking and skip the square root.

use nalgebra::Point2;

use crate::error::FrameSkip;
use crate::types::{BoundingBox, FrameGeometry, TargetPair};

/// Pick the two candidates that best represent the target pair.
///
/// Single pass, deterministic: a candidate replaces the worse of the two
/// kept slots only on a strict improvement, so ties go to the earlier
/// candidate. The returned pair is ordered left/right by center-x.
pub fn select_pair(
    candidates: &[BoundingBox],
    frame: FrameGeometry,
) -> Result<TargetPair, FrameSkip> {
    match candidates {
        [] | [_] => Err(FrameSkip::InsufficientCandidates {
            found: candidates.len(),
        }),
        [a, b] => Ok(TargetPair::ordered(*a, *b)),
        [a, b, rest @ ..] => {
            let center = frame.center();
            let mut first = Ranked::new(*a, center);
            let mut second = Ranked::new(*b, center);
            if second.dist2 < first.dist2 {
                std::mem::swap(&mut first, &mut second);
            }

            for candidate in rest {
                let ranked = Ranked::new(*candidate, center);
                if ranked.dist2 < first.dist2 {
                    second = std::mem::replace(&mut first, ranked);
                } else if ranked.dist2 < second.dist2 {
                    second = ranked;
                }
            }

            Ok(TargetPair::ordered(first.tape, second.tape))
        }
    }
}

#[derive(Clone, Copy)]
struct Ranked {
    tape: BoundingBox,
    dist2: f64,
}

impl Ranked {
    fn new(tape: BoundingBox, frame_center: Point2<f64>) -> Self {
        let dist2 = (tape.center() - frame_center).norm_squared();
        Self { tape, dist2 }
    }
}
