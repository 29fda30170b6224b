//! Mapping from animation time to a frequency count

use crate::fourier::image::Scalar;
use crate::fourier::visualizer::types::{Easing, SweepMode};

impl Easing {
    /// Eases `t`, clamped to `[0, 1]`. Every curve maps 0 to 0 and 1 to 1.
    pub fn apply(self, t: Scalar) -> Scalar {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
            Easing::Cubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Frequency count shown after `elapsed` seconds of scaled animation time.
///
/// `rate` is the number of frequencies a linear ramp adds per second. The
/// result is always within `[0, max]`.
pub fn sweep_target(elapsed: Scalar, rate: Scalar, max: usize, sweep: SweepMode, easing: Easing) -> usize {
    if max == 0 || !(elapsed > 0.0) || !(rate > 0.0) {
        return 0;
    }

    let ramp = elapsed * rate;
    let max_f = max as Scalar;

    match sweep {
        SweepMode::Once => (ramp.floor() as usize).min(max),
        SweepMode::Loop => {
            let span = max_f + 1.0;
            let phase = (ramp % span) / span;
            ((easing.apply(phase) * span).floor() as usize).min(max)
        }
        SweepMode::PingPong => {
            let position = ramp % (2.0 * max_f);
            let phase = if position <= max_f {
                position / max_f
            } else {
                (2.0 * max_f - position) / max_f
            };
            ((easing.apply(phase) * max_f).round() as usize).min(max)
        }
    }
}
