//! Complex image module
//!
//! Dense complex grids used for both pixel data and Fourier coefficients. The
//! domain is carried in the type so spatial and frequency data cannot be mixed.

mod complex_image;
mod rgb_image;
pub mod types;


pub use complex_image::{ComplexImage, FrequencyImage, SpatialImage};
pub use rgb_image::{RgbComplexImage, RgbFrequencyImage, RgbSpatialImage};
pub use types::{Channel, Complex, Domain, Frequency, NORMALIZE_EPSILON, Scalar, Spatial};
