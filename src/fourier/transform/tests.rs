use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use crate::fourier::image::{Channel, Complex, FrequencyImage, RgbSpatialImage, SpatialImage};
use crate::fourier::transform::{
    Direction, Execution, apply_frequency_mask, apply_frequency_mask_circular, fft_1d, forward_2d,
    forward_rgb_2d, inverse_2d, inverse_rgb_2d, keep_frequencies, keep_top_frequencies,
    keep_frequencies_rgb, keep_top_frequencies_rgb, signed_frequency, top_frequency_indices,
    top_frequency_indices_rgb,
};

fn real_image(width: usize, height: usize, f: impl Fn(usize, usize) -> f64) -> SpatialImage {
    let samples = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| Complex::new(f(x, y), 0.0))
        .collect();
    SpatialImage::from_samples(samples, width, height).unwrap()
}

fn textured(width: usize, height: usize) -> SpatialImage {
    real_image(width, height, |x, y| ((x * 7 + y * 13) % 11) as f64 / 10.0 + (x as f64 * 0.3).sin())
}

fn max_error(a: &SpatialImage, b: &SpatialImage) -> f64 {
    a.data()
        .iter()
        .zip(b.data())
        .map(|(p, q)| (p - q).norm())
        .fold(0.0, f64::max)
}

fn mean_squared_error(a: &SpatialImage, b: &SpatialImage) -> f64 {
    let sum: f64 = a.data().iter().zip(b.data()).map(|(p, q)| (p - q).norm_sqr()).sum();
    sum / a.len() as f64
}

fn naive_dft(input: &[Complex]) -> Vec<Complex> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(j, &x)| x * Complex::from_polar(1.0, -2.0 * PI * (k * j) as f64 / n as f64))
                .sum()
        })
        .collect()
}

#[test]
fn test_fft_1d_impulse_and_constant() {
    let mut impulse = vec![Complex::new(1.0, 0.0), Complex::new(0.0, 0.0), Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)];
    fft_1d(&mut impulse, Direction::Forward);
    for c in &impulse {
        assert_abs_diff_eq!(c.re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.im, 0.0, epsilon = 1e-12);
    }

    let mut constant = vec![Complex::new(1.0, 0.0); 4];
    fft_1d(&mut constant, Direction::Forward);
    assert_abs_diff_eq!(constant[0].re, 4.0, epsilon = 1e-12);
    for c in &constant[1..] {
        assert_abs_diff_eq!(c.norm(), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_fft_matches_direct_sum() {
    for n in [2usize, 6, 8, 15, 16] {
        let input: Vec<Complex> = (0..n)
            .map(|i| Complex::new((i as f64 * 0.7).cos(), (i as f64 * 1.3).sin()))
            .collect();
        let expected = naive_dft(&input);
        let mut actual = input.clone();
        fft_1d(&mut actual, Direction::Forward);
        for (a, e) in actual.iter().zip(&expected) {
            assert_abs_diff_eq!((a - e).norm(), 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_inverse_carries_one_over_n() {
    let mut data = vec![Complex::new(8.0, 0.0), Complex::new(0.0, 0.0), Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)];
    fft_1d(&mut data, Direction::Inverse);
    for c in &data {
        assert_abs_diff_eq!(c.re, 2.0, epsilon = 1e-12);
    }
}

#[test]
fn test_short_lengths_untouched() {
    let mut empty: Vec<Complex> = Vec::new();
    fft_1d(&mut empty, Direction::Forward);
    let mut single = vec![Complex::new(3.0, -1.0)];
    fft_1d(&mut single, Direction::Inverse);
    assert_eq!(single, vec![Complex::new(3.0, -1.0)]);
}

#[test]
fn test_round_trip_power_of_two() {
    let image = textured(16, 8);
    let restored = inverse_2d(&forward_2d(&image));
    assert!(max_error(&image, &restored) < 1e-6);
}

#[test]
fn test_round_trip_direct_dft_sizes() {
    let image = textured(6, 5);
    let spectrum = forward_2d(&image);
    assert_eq!(spectrum.dimensions(), (6, 5));
    let restored = inverse_2d(&spectrum);
    assert_eq!(restored.dimensions(), (6, 5));
    assert!(max_error(&image, &restored) < 1e-6);
}

#[test]
fn test_empty_image_transforms_to_empty() {
    let spectrum = forward_2d(&SpatialImage::new(0, 0));
    assert_eq!(spectrum.dimensions(), (0, 0));
    let back = inverse_2d(&FrequencyImage::new(0, 7));
    assert_eq!(back.dimensions(), (0, 7));
    assert!(top_frequency_indices(&spectrum, 5).is_empty());
}

#[test]
fn test_dc_concentration() {
    for (width, height) in [(8, 8), (6, 6)] {
        let image = real_image(width, height, |_, _| 0.5);
        let mut spectrum = forward_2d(&image);

        let total = (width * height) as f64 * 0.5;
        assert_abs_diff_eq!(spectrum.at(0, 0).re, total, epsilon = 1e-9);
        let off_dc: f64 = spectrum.magnitude_image()[1..].iter().sum();
        assert_abs_diff_eq!(off_dc, 0.0, epsilon = 1e-9);

        spectrum.fft_shift();
        assert_abs_diff_eq!(spectrum.at(width / 2, height / 2).re, total, epsilon = 1e-9);
    }
}

#[test]
fn test_checkerboard_energy_at_nyquist() {
    let image = real_image(8, 8, |x, y| ((x + y) % 2) as f64);
    let spectrum = forward_2d(&image);

    assert_abs_diff_eq!(spectrum.at(0, 0).norm(), 32.0, epsilon = 1e-9);
    assert_abs_diff_eq!(spectrum.at(4, 4).norm(), 32.0, epsilon = 1e-9);

    let top = top_frequency_indices(&spectrum, 2);
    assert!(top.contains(&(0, 0)));
    assert!(top.contains(&(4, 4)));
}

#[test]
fn test_constant_fully_captured_by_dc() {
    let image = real_image(4, 4, |_, _| 0.7);
    let dc_only = keep_frequencies(&forward_2d(&image), &[(0, 0)]);
    let restored = inverse_2d(&dc_only);
    assert!(max_error(&image, &restored) < 1e-12);
}

#[test]
fn test_signed_frequency_wraps_upper_half() {
    assert_eq!(signed_frequency(0, 8), 0);
    assert_eq!(signed_frequency(3, 8), 3);
    assert_eq!(signed_frequency(4, 8), -4);
    assert_eq!(signed_frequency(7, 8), -1);
    assert_eq!(signed_frequency(2, 5), -3);
}

#[test]
fn test_rectangular_low_pass_keeps_small_radii() {
    let ones = FrequencyImage::from_samples(vec![Complex::new(1.0, 0.0); 64], 8, 8).unwrap();
    let masked = apply_frequency_mask(&ones, 1.0, true);

    let kept: Vec<(usize, usize)> = (0..8)
        .flat_map(|y| (0..8).map(move |x| (x, y)))
        .filter(|&(x, y)| masked.at(x, y).norm() > 0.0)
        .collect();
    assert_eq!(kept.len(), 5);
    for coord in [(0, 0), (1, 0), (7, 0), (0, 1), (0, 7)] {
        assert!(kept.contains(&coord));
    }
}

#[test]
fn test_rectangular_high_pass_removes_dc() {
    let ones = FrequencyImage::from_samples(vec![Complex::new(1.0, 0.0); 64], 8, 8).unwrap();
    let masked = apply_frequency_mask(&ones, 1.0, false);
    assert_eq!(masked.at(0, 0), Complex::new(0.0, 0.0));
    assert_eq!(masked.magnitude_image().iter().filter(|&&m| m > 0.0).count(), 63);
}

#[test]
fn test_circular_mask_around_shifted_center() {
    let ones = FrequencyImage::from_samples(vec![Complex::new(1.0, 0.0); 64], 8, 8).unwrap();
    let masked = apply_frequency_mask_circular(&ones, 0.5);
    assert_eq!(masked.dimensions(), (8, 8));
    assert_eq!(masked.at(4, 4), Complex::new(1.0, 0.0));
    assert_eq!(masked.at(6, 4), Complex::new(1.0, 0.0));
    assert_eq!(masked.at(6, 6), Complex::new(0.0, 0.0));
    assert_eq!(masked.at(0, 0), Complex::new(0.0, 0.0));
    assert_eq!(masked.magnitude_image().iter().filter(|&&m| m > 0.0).count(), 13);
}

#[test]
fn test_top_indices_ordered_and_bounded() {
    let spectrum = forward_2d(&textured(8, 8));
    let top = top_frequency_indices(&spectrum, 10);
    assert_eq!(top.len(), 10);
    for pair in top.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(spectrum.at(a.0, a.1).norm() >= spectrum.at(b.0, b.1).norm());
    }

    assert_eq!(top_frequency_indices(&spectrum, 1000).len(), 64);
    assert!(top_frequency_indices(&spectrum, 0).is_empty());
}

#[test]
fn test_top_indices_break_ties_by_position() {
    let ones = FrequencyImage::from_samples(vec![Complex::new(1.0, 0.0); 6], 3, 2).unwrap();
    assert_eq!(top_frequency_indices(&ones, 4), vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
}

#[test]
fn test_keep_top_frequencies_sparsity() {
    let spectrum = forward_2d(&textured(8, 8));
    let kept = keep_top_frequencies(&spectrum, 10);
    let non_zero = kept.magnitude_image().iter().filter(|&&m| m > 1e-10).count();
    assert!(non_zero <= 10);
    for (x, y) in top_frequency_indices(&spectrum, 10) {
        assert_eq!(kept.at(x, y), spectrum.at(x, y));
    }
}

#[test]
fn test_reconstruction_error_non_increasing() {
    let image = textured(8, 8);
    let spectrum = forward_2d(&image);

    let mut previous = f64::INFINITY;
    for k in 0..=64 {
        let error = mean_squared_error(&image, &inverse_2d(&keep_top_frequencies(&spectrum, k)));
        assert!(error <= previous + 1e-12, "k={k}: {error} > {previous}");
        previous = error;
    }
    assert!(previous < 1e-20);
}

#[test]
fn test_rgb_parallel_matches_sequential() {
    let pixels: Vec<u32> = (0..48u32).map(|i| (i * 5) << 24 | (255 - i * 3) << 16 | (i * i % 256) << 8).collect();
    let image = RgbSpatialImage::from_rgb(&pixels, 8, 6).unwrap();

    let parallel = forward_rgb_2d(&image, Execution::Parallel);
    let sequential = forward_rgb_2d(&image, Execution::Sequential);
    assert_eq!(parallel, sequential);

    for channel in Channel::ALL {
        assert_eq!(parallel.channel(channel), &forward_2d(image.channel(channel)));
    }

    let restored = inverse_rgb_2d(&parallel, Execution::Parallel);
    assert_eq!(restored.to_rgb().len(), pixels.len());
    for channel in Channel::ALL {
        assert!(max_error(image.channel(channel), restored.channel(channel)) < 1e-9);
    }
}

#[test]
fn test_keep_top_frequencies_rgb_per_channel() {
    let pixels: Vec<u32> = (0..16u32).map(|i| (i * 16) << 24 | ((i % 4) * 60) << 16 | 0x80 << 8).collect();
    let spectrum = forward_rgb_2d(&RgbSpatialImage::from_rgb(&pixels, 4, 4).unwrap(), Execution::Sequential);
    let kept = keep_top_frequencies_rgb(&spectrum, 3, Execution::Parallel);

    for channel in Channel::ALL {
        assert_eq!(kept.channel(channel), &keep_top_frequencies(spectrum.channel(channel), 3));
    }
}

#[test]
fn test_rgb_selections_are_per_channel() {
    let pixels: Vec<u32> = (0..16u32).map(|i| ((i % 4) * 60) << 24 | ((i / 4) * 60) << 16 | (i * 9) << 8).collect();
    let spectrum = forward_rgb_2d(&RgbSpatialImage::from_rgb(&pixels, 4, 4).unwrap(), Execution::Sequential);

    let selections = top_frequency_indices_rgb(&spectrum, 4, Execution::Parallel);
    for channel in Channel::ALL {
        assert_eq!(selections[channel.index()], top_frequency_indices(spectrum.channel(channel), 4));
    }
    assert_ne!(selections[Channel::Red.index()], selections[Channel::Green.index()]);

    let kept = keep_frequencies_rgb(&spectrum, &selections);
    assert_eq!(kept, keep_top_frequencies_rgb(&spectrum, 4, Execution::Sequential));
}

fn real_grid() -> impl Strategy<Value = (usize, usize, Vec<f64>)> {
    (1usize..10, 1usize..10).prop_flat_map(|(w, h)| {
        (Just(w), Just(h), prop::collection::vec(0.0f64..1.0, w * h))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_real_images((width, height, values) in real_grid()) {
        let image = real_image(width, height, |x, y| values[y * width + x]);
        let restored = inverse_2d(&forward_2d(&image));
        prop_assert!(max_error(&image, &restored) < 1e-6);
    }

    #[test]
    fn prop_top_indices_sorted((width, height, values) in real_grid(), k in 0usize..100) {
        let spectrum = forward_2d(&real_image(width, height, |x, y| values[y * width + x]));
        let top = top_frequency_indices(&spectrum, k);
        prop_assert_eq!(top.len(), k.min(width * height));
        for pair in top.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(spectrum.at(a.0, a.1).norm() >= spectrum.at(b.0, b.1).norm());
        }
    }
}
