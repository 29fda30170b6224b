use std::f64::consts::PI;

use crate::fourier::image::{Complex, Scalar};
use crate::fourier::transform::types::Direction;

/// In-place 1D transform of `data`.
///
/// Power-of-two lengths use radix-2 Cooley-Tukey, everything else a direct DFT.
/// Lengths 0 and 1 are left untouched.
pub fn fft_1d(data: &mut [Complex], direction: Direction) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    if n.is_power_of_two() {
        cooley_tukey(data, direction);
    } else {
        dft(data, direction);
    }
}

fn bit_reverse_permute(data: &mut [Complex]) {
    let n = data.len();
    let mut j = 0usize;
    for i in 0..n {
        if i < j {
            data.swap(i, j);
        }
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
    }
}

fn cooley_tukey(data: &mut [Complex], direction: Direction) {
    let n = data.len();
    bit_reverse_permute(data);

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let theta = direction.sign() * 2.0 * PI / len as Scalar;
        let twiddles: Vec<Complex> = (0..half)
            .map(|j| Complex::from_polar(1.0, theta * j as Scalar))
            .collect();

        for block in data.chunks_exact_mut(len) {
            let (lo, hi) = block.split_at_mut(half);
            for ((u, v), &w) in lo.iter_mut().zip(hi.iter_mut()).zip(&twiddles) {
                let t = *v * w;
                *v = *u - t;
                *u += t;
            }
        }
        len <<= 1;
    }

    direction.scale(data);
}

fn dft(data: &mut [Complex], direction: Direction) {
    let n = data.len();
    let step = direction.sign() * 2.0 * PI / n as Scalar;

    let spectrum: Vec<Complex> = (0..n)
        .map(|k| {
            data.iter()
                .enumerate()
                // (k * j) mod n keeps the angle small and accurate
                .map(|(j, &x)| x * Complex::from_polar(1.0, step * ((k * j) % n) as Scalar))
                .sum()
        })
        .collect();

    data.copy_from_slice(&spectrum);
    direction.scale(data);
}
