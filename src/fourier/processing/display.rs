//! Conversions from scalar fields to displayable values

use crate::fourier::image::{NORMALIZE_EPSILON, Scalar};

fn min_max(values: &[Scalar]) -> (Scalar, Scalar) {
    values
        .iter()
        .fold((Scalar::MAX, Scalar::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

fn range_of(values: &[Scalar]) -> (Scalar, Scalar) {
    let (min, max) = min_max(values);
    let range = max - min;
    (min, if range < NORMALIZE_EPSILON { 1.0 } else { range })
}

/// Min-max normalizes into `[0, 255]`. A spread below [`NORMALIZE_EPSILON`] divides by 1.0.
pub fn normalize_to_u8(values: &[Scalar]) -> Vec<u8> {
    if values.is_empty() {
        return Vec::new();
    }
    let (min, range) = range_of(values);
    values
        .iter()
        .map(|&v| ((v - min) / range * 255.0).clamp(0.0, 255.0) as u8)
        .collect()
}

/// Min-max normalizes into `[0, 1]` as `f32`, ready for texture upload.
pub fn normalize_to_unit(values: &[Scalar]) -> Vec<f32> {
    if values.is_empty() {
        return Vec::new();
    }
    let (min, range) = range_of(values);
    values.iter().map(|&v| ((v - min) / range) as f32).collect()
}

/// `log10(1 + v)` in place, compressing the dynamic range of a magnitude spectrum.
pub fn log_scale(values: &mut [Scalar]) {
    for v in values {
        *v = (1.0 + *v).log10();
    }
}

/// Maps gray levels onto a blue, cyan, green, yellow, red ramp.
///
/// Output is interleaved `[r, g, b, r, g, b, ...]`.
pub fn color_map(gray: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(gray.len() * 3);
    for &level in gray {
        let t = f32::from(level) / 255.0;
        let ramp = |x: f32| (x * 4.0 * 255.0) as u8;
        let (r, g, b) = if t < 0.25 {
            (0, ramp(t), 255)
        } else if t < 0.5 {
            (0, 255, ((1.0 - (t - 0.25) * 4.0) * 255.0) as u8)
        } else if t < 0.75 {
            (ramp(t - 0.5), 255, 0)
        } else {
            (255, ((1.0 - (t - 0.75) * 4.0) * 255.0) as u8, 0)
        };
        rgb.extend_from_slice(&[r, g, b]);
    }
    rgb
}
