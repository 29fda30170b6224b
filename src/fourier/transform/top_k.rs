use std::cmp::Ordering;

use crate::fourier::image::{FrequencyImage, Scalar};

/// Larger magnitude first, lower row-major offset first among equals.
fn rank(a: &(Scalar, usize), b: &(Scalar, usize)) -> Ordering {
    b.0.total_cmp(&a.0).then(a.1.cmp(&b.1))
}

/// Coordinates of the `k` largest-magnitude coefficients, largest first.
///
/// Returns every coordinate when the image has fewer than `k` samples. Ties
/// are broken by row-major position, so the selection for `k` is always a
/// prefix of the selection for `k + 1`.
pub fn top_frequency_indices(spectrum: &FrequencyImage, k: usize) -> Vec<(usize, usize)> {
    let width = spectrum.width();
    let limit = k.min(spectrum.len());
    if limit == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(Scalar, usize)> = spectrum
        .data()
        .iter()
        .enumerate()
        .map(|(offset, c)| (c.norm(), offset))
        .collect();

    if limit < ranked.len() {
        ranked.select_nth_unstable_by(limit - 1, rank);
        ranked.truncate(limit);
    }
    ranked.sort_unstable_by(rank);

    ranked
        .into_iter()
        .map(|(_, offset)| (offset % width, offset / width))
        .collect()
}

/// Zero spectrum carrying only the coefficients at `coordinates`.
pub fn keep_frequencies(spectrum: &FrequencyImage, coordinates: &[(usize, usize)]) -> FrequencyImage {
    let (width, height) = spectrum.dimensions();
    let mut kept = FrequencyImage::new(width, height);
    for &(x, y) in coordinates {
        *kept.at_mut(x, y) = spectrum.at(x, y);
    }
    kept
}

/// Zero spectrum carrying only the `k` strongest coefficients of `spectrum`.
pub fn keep_top_frequencies(spectrum: &FrequencyImage, k: usize) -> FrequencyImage {
    keep_frequencies(spectrum, &top_frequency_indices(spectrum, k))
}
