//! Cross-validation of the two distance estimators.

use serde::{Deserialize, Serialize};

use crate::types::{Reading, Triangulation};

/// Acceptance settings for the consistency gate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateParams {
    /// Maximum relative spread between the two distance estimates,
    /// measured against the width-based one.
    pub max_relative_spread: f64,
}

impl Default for GateParams {
    fn default() -> Self {
        Self {
            max_relative_spread: 0.10,
        }
    }
}

impl GateParams {
    /// Decide whether a frame's estimates are trustworthy.
    ///
    /// Returns an accepted reading built from the width-based distance, or
    /// [`Reading::SENTINEL`] when the estimators disagree beyond the
    /// tolerance. Exactly one reading per call; the angle field is reserved
    /// and always zero on acceptance.
    pub fn evaluate(&self, estimate: &Triangulation) -> Reading {
        let spread = (estimate.distance_by_height_in - estimate.distance_by_width_in).abs()
            / estimate.distance_by_width_in;
        if spread < self.max_relative_spread {
            Reading::accepted(estimate.distance_by_width_in, estimate.lateral_offset_in)
        } else {
            Reading::SENTINEL
        }
    }
}
