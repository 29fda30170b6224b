use tracing::{debug, instrument};

use crate::fourier::image::{Complex, FrequencyImage, SpatialImage};
use crate::fourier::transform::fft::fft_1d;
use crate::fourier::transform::types::Direction;

/// Separable 2D transform of a row-major `width x height` buffer.
///
/// Every row is transformed first, then every column.
pub fn fft_2d_in_place(data: &mut [Complex], width: usize, height: usize, direction: Direction) {
    debug_assert_eq!(data.len(), width * height);
    if data.is_empty() {
        return;
    }

    if !width.is_power_of_two() || !height.is_power_of_two() {
        debug!(width, height, "Non power-of-two axis, using direct DFT");
    }

    for row in data.chunks_exact_mut(width) {
        fft_1d(row, direction);
    }

    let mut column = vec![Complex::new(0.0, 0.0); height];
    for x in 0..width {
        for (y, sample) in column.iter_mut().enumerate() {
            *sample = data[y * width + x];
        }
        fft_1d(&mut column, direction);
        for (y, sample) in column.iter().enumerate() {
            data[y * width + x] = *sample;
        }
    }
}

/// Spatial samples to Fourier coefficients, unnormalized.
#[instrument(level = "debug", skip(image), fields(width = image.width(), height = image.height()))]
pub fn forward_2d(image: &SpatialImage) -> FrequencyImage {
    let (width, height) = image.dimensions();
    let mut spectrum = image.clone();
    fft_2d_in_place(spectrum.data_mut(), width, height, Direction::Forward);
    spectrum.retag()
}

/// Fourier coefficients back to spatial samples, scaled by `1 / (width * height)`.
#[instrument(level = "debug", skip(spectrum), fields(width = spectrum.width(), height = spectrum.height()))]
pub fn inverse_2d(spectrum: &FrequencyImage) -> SpatialImage {
    let (width, height) = spectrum.dimensions();
    let mut image = spectrum.clone();
    fft_2d_in_place(image.data_mut(), width, height, Direction::Inverse);
    image.retag()
}
