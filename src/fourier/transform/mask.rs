use tracing::debug;

use crate::fourier::image::{Complex, FrequencyImage, Scalar};

/// Signed frequency of an unshifted index: indices at or past `n / 2` wrap to `index - n`.
pub fn signed_frequency(index: usize, n: usize) -> isize {
    if index < n / 2 {
        index as isize
    } else {
        index as isize - n as isize
    }
}

/// Radial mask in the unshifted layout.
///
/// With `low_pass` every coefficient whose radius exceeds `cutoff` is zeroed,
/// otherwise every coefficient whose radius is below it.
pub fn apply_frequency_mask(spectrum: &FrequencyImage, cutoff: Scalar, low_pass: bool) -> FrequencyImage {
    let (width, height) = spectrum.dimensions();
    let mut masked = spectrum.clone();
    let mut zeroed = 0usize;

    for y in 0..height {
        let fy = signed_frequency(y, height) as Scalar;
        for x in 0..width {
            let fx = signed_frequency(x, width) as Scalar;
            let radius = (fx * fx + fy * fy).sqrt();
            if (low_pass && radius > cutoff) || (!low_pass && radius < cutoff) {
                *masked.at_mut(x, y) = Complex::new(0.0, 0.0);
                zeroed += 1;
            }
        }
    }

    debug!(cutoff, low_pass, zeroed, "Applied frequency mask");
    masked
}

/// Circular low-pass in the shifted layout.
///
/// The spectrum must already be [`FrequencyImage::fft_shift`]ed. Coefficients
/// farther than `min(width, height) / 2 * radius_ratio` from the shifted DC
/// position `(width / 2, height / 2)` are zeroed.
pub fn apply_frequency_mask_circular(spectrum: &FrequencyImage, radius_ratio: Scalar) -> FrequencyImage {
    let (width, height) = spectrum.dimensions();
    let mut masked = spectrum.clone();

    let cx = (width / 2) as Scalar;
    let cy = (height / 2) as Scalar;
    let max_radius = (width.min(height) as Scalar / 2.0) * radius_ratio;

    for y in 0..height {
        let dy = y as Scalar - cy;
        for x in 0..width {
            let dx = x as Scalar - cx;
            if (dx * dx + dy * dy).sqrt() > max_radius {
                *masked.at_mut(x, y) = Complex::new(0.0, 0.0);
            }
        }
    }

    masked
}
