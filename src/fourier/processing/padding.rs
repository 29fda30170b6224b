use tracing::debug;

use crate::fourier::common::error::{FourierError, Result};
use crate::fourier::image::{ComplexImage, Domain};

/// Zero-pads `image` on the right and bottom up to the next power-of-two size.
///
/// Returns a plain copy when both sides already are powers of two. A padded
/// image has a different spectrum from the original; this is for callers that
/// prefer the radix-2 path over exact frequencies.
pub fn pad_to_power_of_two<D: Domain>(image: &ComplexImage<D>) -> ComplexImage<D> {
    let (width, height) = image.dimensions();
    let padded_width = width.next_power_of_two();
    let padded_height = height.next_power_of_two();

    if image.is_empty() || (padded_width == width && padded_height == height) {
        return image.clone();
    }

    debug!(width, height, padded_width, padded_height, "Padding image to power of two");

    let mut padded = ComplexImage::new(padded_width, padded_height);
    for y in 0..height {
        let row = &image.data()[y * width..(y + 1) * width];
        padded.data_mut()[y * padded_width..y * padded_width + width].copy_from_slice(row);
    }
    padded
}

/// Top-left `width x height` region of `image`.
pub fn crop<D: Domain>(image: &ComplexImage<D>, width: usize, height: usize) -> Result<ComplexImage<D>> {
    if width > image.width() || height > image.height() {
        return Err(FourierError::InvalidDimensions(width, height));
    }

    let source_width = image.width();
    let mut cropped = ComplexImage::new(width, height);
    for y in 0..height {
        let row = &image.data()[y * source_width..y * source_width + width];
        cropped.data_mut()[y * width..(y + 1) * width].copy_from_slice(row);
    }
    Ok(cropped)
}
