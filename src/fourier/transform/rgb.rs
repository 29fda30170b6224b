use tracing::instrument;

use crate::fourier::image::{Channel, ComplexImage, Domain, RgbComplexImage, RgbFrequencyImage, RgbSpatialImage};
use crate::fourier::transform::fft2d::{forward_2d, inverse_2d};
use crate::fourier::transform::top_k::{keep_frequencies, top_frequency_indices};
use crate::fourier::transform::types::Execution;

/// Runs `op` on each channel independently, results in `[red, green, blue]` order.
fn per_channel<D, T, F>(image: &RgbComplexImage<D>, execution: Execution, op: F) -> [T; 3]
where
    D: Domain,
    T: Send,
    F: Fn(&ComplexImage<D>) -> T + Sync,
{
    let [red, green, blue] = image.channels();
    match execution {
        Execution::Sequential => [op(red), op(green), op(blue)],
        Execution::Parallel => {
            let (r, (g, b)) = rayon::join(|| op(red), || rayon::join(|| op(green), || op(blue)));
            [r, g, b]
        }
    }
}

fn map_channels<D, E, F>(image: &RgbComplexImage<D>, execution: Execution, op: F) -> RgbComplexImage<E>
where
    D: Domain,
    E: Domain,
    F: Fn(&ComplexImage<D>) -> ComplexImage<E> + Sync,
{
    RgbComplexImage::from_same_size_channels(per_channel(image, execution, op))
}

#[instrument(level = "debug", skip(image), fields(width = image.width(), height = image.height()))]
pub fn forward_rgb_2d(image: &RgbSpatialImage, execution: Execution) -> RgbFrequencyImage {
    map_channels(image, execution, forward_2d)
}

#[instrument(level = "debug", skip(spectrum), fields(width = spectrum.width(), height = spectrum.height()))]
pub fn inverse_rgb_2d(spectrum: &RgbFrequencyImage, execution: Execution) -> RgbSpatialImage {
    map_channels(spectrum, execution, inverse_2d)
}

/// [`top_frequency_indices`] for every channel, indexed by [`Channel::index`].
pub fn top_frequency_indices_rgb(
    spectrum: &RgbFrequencyImage,
    k: usize,
    execution: Execution,
) -> [Vec<(usize, usize)>; 3] {
    per_channel(spectrum, execution, |channel| top_frequency_indices(channel, k))
}

/// Zero spectrum carrying, per channel, only the coefficients listed for that channel.
pub fn keep_frequencies_rgb(spectrum: &RgbFrequencyImage, selections: &[Vec<(usize, usize)>; 3]) -> RgbFrequencyImage {
    let channels = Channel::ALL.map(|channel| keep_frequencies(spectrum.channel(channel), &selections[channel.index()]));
    RgbComplexImage::from_same_size_channels(channels)
}

/// Per-channel top-K filter; each channel picks its own `k` coefficients.
pub fn keep_top_frequencies_rgb(spectrum: &RgbFrequencyImage, k: usize, execution: Execution) -> RgbFrequencyImage {
    keep_frequencies_rgb(spectrum, &top_frequency_indices_rgb(spectrum, k, execution))
}
