//! Spatial filters applied before transforming

use crate::fourier::image::{Complex, Scalar, SpatialImage};

/// Separable Gaussian blur with a zero boundary.
///
/// The kernel spans `6 * sigma + 1` taps, rounded up to an odd count.
pub fn gaussian_blur(image: &SpatialImage, sigma: Scalar) -> SpatialImage {
    if sigma <= 0.0 || image.is_empty() {
        return image.clone();
    }

    let mut taps = (6.0 * sigma + 1.0) as usize;
    if taps % 2 == 0 {
        taps += 1;
    }
    let half = (taps / 2) as isize;

    let mut kernel: Vec<Scalar> = (0..taps as isize)
        .map(|i| {
            let d = (i - half) as Scalar;
            (-(d * d) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: Scalar = kernel.iter().sum();
    kernel.iter_mut().for_each(|k| *k /= sum);

    let (width, height) = image.dimensions();
    let mut horizontal = SpatialImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            *horizontal.at_mut(x, y) = convolve(&kernel, half, x, width, |sx| image.at(sx, y));
        }
    }

    let mut blurred = SpatialImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            *blurred.at_mut(x, y) = convolve(&kernel, half, y, height, |sy| horizontal.at(x, sy));
        }
    }
    blurred
}

fn convolve(kernel: &[Scalar], half: isize, center: usize, len: usize, sample: impl Fn(usize) -> Complex) -> Complex {
    kernel
        .iter()
        .enumerate()
        .filter_map(|(k, &weight)| {
            let pos = center as isize + k as isize - half;
            (0..len as isize).contains(&pos).then(|| sample(pos as usize) * weight)
        })
        .sum()
}

const SOBEL_X: [[Scalar; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[Scalar; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Sobel gradient magnitude stored in the real part. Border pixels stay zero.
pub fn sobel_edges(image: &SpatialImage) -> SpatialImage {
    let (width, height) = image.dimensions();
    let mut edges = SpatialImage::new(width, height);
    if width < 3 || height < 3 {
        return edges;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut gx = Complex::new(0.0, 0.0);
            let mut gy = Complex::new(0.0, 0.0);
            for (dy, (row_x, row_y)) in SOBEL_X.iter().zip(&SOBEL_Y).enumerate() {
                for dx in 0..3 {
                    let pixel = image.at(x + dx - 1, y + dy - 1);
                    gx += pixel * row_x[dx];
                    gy += pixel * row_y[dx];
                }
            }
            let magnitude = (gx.norm_sqr() + gy.norm_sqr()).sqrt();
            *edges.at_mut(x, y) = Complex::new(magnitude, 0.0);
        }
    }
    edges
}
