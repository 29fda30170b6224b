//! Sample and domain types shared by every image in the crate

use std::fmt::Debug;

/// Floating-point width used for every sample, spectrum and coordinate.
pub type Scalar = f64;

/// Complex sample built on [`Scalar`].
pub type Complex = num_complex::Complex<Scalar>;

pub(crate) const ZERO: Complex = Complex::new(0.0, 0.0);

/// Threshold below which a normalization range counts as degenerate.
pub const NORMALIZE_EPSILON: Scalar = 1e-10;

mod sealed {
    pub trait Sealed {}
}

/// Marker for the domain an image's samples live in.
///
/// Implemented only by [`Spatial`] and [`Frequency`].
pub trait Domain: sealed::Sealed + Debug + Clone + Copy + Default + PartialEq + Send + Sync + 'static {
    const NAME: &'static str;
}

/// Pixel-space samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spatial;

/// Fourier coefficients, unshifted unless the caller shifted them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frequency;

impl sealed::Sealed for Spatial {}
impl sealed::Sealed for Frequency {}

impl Domain for Spatial {
    const NAME: &'static str = "spatial";
}

impl Domain for Frequency {
    const NAME: &'static str = "frequency";
}

/// Color channel of an RGB image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Bit offset of this channel inside a packed `R, G, B, A` word.
    pub(crate) fn shift(self) -> u32 {
        match self {
            Channel::Red => 24,
            Channel::Green => 16,
            Channel::Blue => 8,
        }
    }
}
