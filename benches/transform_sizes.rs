use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spectral_recon_rs::fourier::{
    Execution, RgbSpatialImage, SpatialImage, forward_2d, forward_rgb_2d, inverse_2d, keep_top_frequencies,
};

fn generate_mock_image(width: usize, height: usize) -> SpatialImage {
    let pixels: Vec<u8> = (0..width * height)
        .map(|i| ((i % width + i / width) % 256) as u8)
        .collect();
    SpatialImage::from_grayscale(&pixels, width, height).unwrap()
}

fn generate_mock_rgb(width: usize, height: usize) -> RgbSpatialImage {
    let pixels: Vec<u32> = (0..width * height)
        .map(|i| {
            let v = (i % 256) as u32;
            (v << 24) | ((255 - v) << 16) | ((v / 2) << 8) | 0xFF
        })
        .collect();
    RgbSpatialImage::from_rgb(&pixels, width, height).unwrap()
}

fn benchmark_forward_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_by_size");

    // power-of-two sizes take the radix-2 path, the others fall back to the direct sum
    let sizes = vec![
        (32, 32, "32x32"),
        (30, 30, "30x30"),
        (64, 64, "64x64"),
        (60, 60, "60x60"),
        (256, 256, "256x256"),
    ];

    for (width, height, label) in sizes {
        let image = generate_mock_image(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            b.iter(|| forward_2d(black_box(image)));
        });
    }

    group.finish();
}

fn benchmark_top_k_reconstruction(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k_reconstruction");
    let spectrum = forward_2d(&generate_mock_image(128, 128));

    for k in [1, 64, 1024, 128 * 128] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| inverse_2d(&keep_top_frequencies(black_box(&spectrum), k)));
        });
    }

    group.finish();
}

fn benchmark_rgb_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb_execution");
    let image = generate_mock_rgb(128, 128);

    group.bench_function("sequential", |b| {
        b.iter(|| forward_rgb_2d(black_box(&image), Execution::Sequential));
    });

    group.bench_function("parallel", |b| {
        b.iter(|| forward_rgb_2d(black_box(&image), Execution::Parallel));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_forward_sizes,
    benchmark_top_k_reconstruction,
    benchmark_rgb_execution
);
criterion_main!(benches);
