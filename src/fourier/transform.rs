//! Fourier transform engine
//!
//! Stateless 2D transforms plus the frequency-domain operations built on them:
//! radial masks, top-K coefficient selection and the per-channel RGB fan-out.
//!
//! Axes whose length is a power of two go through an iterative radix-2 FFT.
//! Any other length falls back to a direct O(n^2) DFT, so a 1000x1000 image is
//! dramatically slower than a 1024x1024 one. Callers that care should pad with
//! [`crate::fourier::processing::pad_to_power_of_two`] first.

mod fft;
mod fft2d;
mod mask;
mod rgb;
mod top_k;
pub mod types;

#[cfg(test)]
mod tests;

pub use fft::fft_1d;
pub use fft2d::{fft_2d_in_place, forward_2d, inverse_2d};
pub use mask::{apply_frequency_mask, apply_frequency_mask_circular, signed_frequency};
pub use rgb::{
    forward_rgb_2d, inverse_rgb_2d, keep_frequencies_rgb, keep_top_frequencies_rgb, top_frequency_indices_rgb,
};
pub use top_k::{keep_frequencies, keep_top_frequencies, top_frequency_indices};
pub use types::{Direction, Execution};
