use spectral_recon_rs::fourier::{
    Execution, FourierVisualizer, RgbSpatialImage, SpatialImage, VisualizerConfig, VisualizerEvent,
    forward_2d, forward_rgb_2d,
};
use spectral_recon_rs::fourier::visualizer::{Easing, SweepMode};
use spectral_recon_rs::logger;

use tracing::{info, warn};

const SIZE: usize = 64;
const FRAME_TIME: f64 = 1.0 / 60.0;

/// Concentric rings, a pattern with a few dominant frequencies.
fn rings(width: usize, height: usize) -> Vec<u8> {
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| {
            let r = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
            (127.5 + 127.5 * (r / 3.0).cos()) as u8
        })
        .collect()
}

fn gradient_rgb(width: usize, height: usize) -> Vec<u32> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| {
            let r = (x * 255 / width.max(1)) as u32;
            let g = (y * 255 / height.max(1)) as u32;
            let b = ((x + y) * 127 / (width + height).max(1)) as u32;
            (r << 24) | (g << 16) | (b << 8) | 0xFF
        })
        .collect()
}

fn mean_squared_error(a: &SpatialImage, b: &SpatialImage) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    let sum: f64 = a.data().iter().zip(b.data()).map(|(p, q)| (p - q).norm_sqr()).sum();
    sum / a.len() as f64
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting spectral reconstruction demo...");

    let config = VisualizerConfig::builder()
        .sweep(SweepMode::PingPong)
        .easing(Easing::SmoothStep)
        .animation_speed(40.0)
        .execution(Execution::Parallel)
        .animate(true)
        .build();
    let mut visualizer = FourierVisualizer::new(config);

    info!("Sweep: {:?}, easing: {:?}", visualizer.config().sweep, visualizer.config().easing);

    let (_, events) = visualizer.subscribe_channel();

    let original = SpatialImage::from_grayscale(&rings(SIZE, SIZE), SIZE, SIZE)?;
    visualizer.set_image(forward_2d(&original));

    for frame in 0..240 {
        visualizer.update_animation(FRAME_TIME);
        if frame % 40 == 0 {
            if let Some(reconstruction) = visualizer.reconstructed_image() {
                info!(
                    frame,
                    frequencies = visualizer.frequency_count(),
                    mse = mean_squared_error(&original, reconstruction),
                    "Grayscale sweep"
                );
            }
        }
    }

    let pixels = gradient_rgb(SIZE / 2, SIZE / 2);
    let rgb = RgbSpatialImage::from_rgb(&pixels, SIZE / 2, SIZE / 2)?;
    visualizer.set_rgb_image(forward_rgb_2d(&rgb, Execution::Parallel));
    visualizer.set_frequency_count(32);

    match visualizer.reconstructed_rgb_image() {
        Some(reconstruction) => {
            let packed = reconstruction.to_rgb();
            let exact = packed.iter().zip(&pixels).filter(|(a, b)| a == b).count();
            info!(
                frequencies = visualizer.frequency_count(),
                exact_pixels = exact,
                total_pixels = pixels.len(),
                lines = visualizer.visualization_lines(800.0, 600.0).len(),
                "RGB reconstruction"
            );
        }
        None => warn!("RGB reconstruction missing"),
    }

    let changes = events
        .try_iter()
        .filter(|event| matches!(event, VisualizerEvent::FrequencyCountChanged { .. }))
        .count();
    info!("Frequency count changed {} times", changes);

    Ok(())
}
