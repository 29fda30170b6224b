//! Transform parameters

use crate::fourier::image::{Complex, Scalar};

/// Direction of a transform.
///
/// Only the twiddle sign and the final `1/n` scaling depend on it: forward is
/// unnormalized, inverse divides by `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    /// Sign of the twiddle exponent.
    pub(crate) fn sign(self) -> Scalar {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }

    pub(crate) fn scale(self, data: &mut [Complex]) {
        if self == Direction::Inverse && !data.is_empty() {
            let factor = 1.0 / data.len() as Scalar;
            for sample in data {
                *sample *= factor;
            }
        }
    }
}

/// How the three RGB channels are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// One channel after another on the calling thread
    Sequential,
    /// One rayon task per channel, joined before returning
    #[default]
    Parallel,
}
