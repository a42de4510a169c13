//! Page orientation estimation from directional confidence signals.

use crate::engine::OrientationSignals;
use crate::types::Orientation;

/// When the magnitudes of the two signals differ by more than this, the page
/// is taken to be upright or inverted rather than rotated sideways.
const UP_DOWN_MARGIN: f32 = 5.0;

/// Derive a 0/90/180/270-degree rotation estimate from the image library's
/// orientation signals.
///
/// `None` signals (the heuristic errored) yield a zero-confidence result.
/// On success the confidence is a fixed 1.0 regardless of signal magnitude;
/// the estimator is binary-decisive, not continuously scored.
pub fn estimate(signals: Option<OrientationSignals>) -> Orientation {
    let Some(signals) = signals else {
        return Orientation::default();
    };

    let up = signals.up_confidence;
    let left = signals.left_confidence;

    let is_up_or_down = up.abs() - left.abs() > UP_DOWN_MARGIN;
    let rotation = if is_up_or_down {
        if up > 0.0 {
            0
        } else {
            180
        }
    } else if left < 0.0 {
        90
    } else {
        270
    };

    Orientation {
        rotation,
        confidence: 1.0,
    }
}
