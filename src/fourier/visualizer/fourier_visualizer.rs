use tracing::{debug, info, instrument, trace};

use crate::fourier::image::{FrequencyImage, RgbFrequencyImage, RgbSpatialImage, Scalar, SpatialImage};
use crate::fourier::processing::{log_scale, normalize_to_u8};
use crate::fourier::transform::{
    inverse_2d, inverse_rgb_2d, keep_frequencies, keep_frequencies_rgb, signed_frequency,
    top_frequency_indices, top_frequency_indices_rgb,
};
use crate::fourier::visualizer::animation::sweep_target;
use crate::fourier::visualizer::events::{EventBus, SubscriptionId, VisualizerEvent};
use crate::fourier::visualizer::timing::ReconstructionTimings;
use crate::fourier::visualizer::types::{
    AnimationState, ImageMode, Reconstruction, VisualizationLine, VisualizerConfig, VisualizerSnapshot,
    VisualizerState,
};

/// Spectrum being visualized together with its current reconstruction.
#[derive(Debug, Clone)]
enum Held {
    Grayscale {
        spectrum: FrequencyImage,
        reconstruction: SpatialImage,
    },
    Rgb {
        spectrum: RgbFrequencyImage,
        reconstruction: RgbSpatialImage,
        /// Current per-channel selections, indexed by `Channel::index`.
        selections: [Vec<(usize, usize)>; 3],
    },
}

impl Held {
    fn mode(&self) -> ImageMode {
        match self {
            Held::Grayscale { .. } => ImageMode::Grayscale,
            Held::Rgb { .. } => ImageMode::Rgb,
        }
    }

    fn representative<'a>(&'a self, config: &VisualizerConfig) -> &'a FrequencyImage {
        match self {
            Held::Grayscale { spectrum, .. } => spectrum,
            Held::Rgb { spectrum, .. } => spectrum.channel(config.representative_channel),
        }
    }

    /// Coordinates reported as active: the grayscale selection, or the
    /// representative channel's in RGB mode.
    fn active(&self, config: &VisualizerConfig) -> Option<Vec<(usize, usize)>> {
        match self {
            Held::Grayscale { .. } => None,
            Held::Rgb { selections, .. } => Some(selections[config.representative_channel.index()].clone()),
        }
    }

    /// Rebuilds the reconstruction from the `count` strongest frequencies and
    /// returns the coordinates used.
    fn reconstruct(
        &mut self,
        count: usize,
        config: &VisualizerConfig,
        timings: &mut ReconstructionTimings,
    ) -> Vec<(usize, usize)> {
        match self {
            Held::Grayscale { spectrum, reconstruction } => {
                let active = timings.record("select", || top_frequency_indices(spectrum, count));
                let filtered = timings.record("filter", || keep_frequencies(spectrum, &active));
                *reconstruction = timings.record("inverse", || inverse_2d(&filtered));
                active
            }
            Held::Rgb { spectrum, reconstruction, selections } => {
                *selections = timings.record("select", || {
                    top_frequency_indices_rgb(spectrum, count, config.execution)
                });
                let filtered = timings.record("filter", || keep_frequencies_rgb(spectrum, selections));
                *reconstruction = timings.record("inverse", || inverse_rgb_2d(&filtered, config.execution));
                selections[config.representative_channel.index()].clone()
            }
        }
    }

    fn reconstruction(&self) -> Reconstruction {
        match self {
            Held::Grayscale { reconstruction, .. } => Reconstruction::Grayscale(reconstruction.clone()),
            Held::Rgb { reconstruction, .. } => Reconstruction::Rgb(reconstruction.clone()),
        }
    }
}

/// Progressive top-K reconstruction of a spectrum, with an animated sweep
/// over the number of frequencies used.
///
/// A visualizer starts [`VisualizerState::Idle`]. Loading a grayscale or RGB
/// spectrum resets it to [`VisualizerState::Loaded`] with an all-zero
/// reconstruction; any non-zero frequency count moves it to
/// [`VisualizerState::Reconstructing`]. Only one image mode is active at a time.
///
/// Readers get shared borrows or an owned [`VisualizerSnapshot`]; all
/// mutation goes through `&mut self` methods.
#[derive(Debug)]
pub struct FourierVisualizer {
    config: VisualizerConfig,
    held: Option<Held>,
    animation: AnimationState,
    events: EventBus,
    last_timings: ReconstructionTimings,
}

impl Default for FourierVisualizer {
    fn default() -> Self {
        Self::new(VisualizerConfig::default())
    }
}

impl FourierVisualizer {
    pub fn new(config: VisualizerConfig) -> Self {
        let animation = AnimationState {
            animating: config.animate,
            speed: config.animation_speed,
            ..AnimationState::default()
        };
        Self {
            config,
            held: None,
            animation,
            events: EventBus::new(),
            last_timings: ReconstructionTimings::new(),
        }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Replaces the configuration. Speed, the animation flag and the
    /// representative channel take the new values immediately; the held image
    /// and reconstruction are kept.
    pub fn set_config(&mut self, config: VisualizerConfig) {
        self.animation.animating = config.animate;
        self.animation.speed = config.animation_speed;
        let channel_changed = config.representative_channel != self.config.representative_channel;
        self.config = config;

        if channel_changed {
            if let Some(active) = self.held.as_ref().and_then(|held| held.active(&self.config)) {
                debug!(channel = ?self.config.representative_channel, "Representative channel changed");
                self.animation.active_frequencies = active;
            }
        }
    }

    /// Holds a grayscale spectrum, discarding any previous image and progress.
    pub fn set_image(&mut self, spectrum: FrequencyImage) {
        let (width, height) = spectrum.dimensions();
        let reconstruction = SpatialImage::new(width, height);
        self.load(Held::Grayscale { spectrum, reconstruction }, width, height);
    }

    /// Holds an RGB spectrum, discarding any previous image and progress.
    pub fn set_rgb_image(&mut self, spectrum: RgbFrequencyImage) {
        let (width, height) = spectrum.dimensions();
        let reconstruction = RgbSpatialImage::new(width, height);
        let selections = Default::default();
        self.load(Held::Rgb { spectrum, reconstruction, selections }, width, height);
    }

    fn load(&mut self, held: Held, width: usize, height: usize) {
        let mode = held.mode();
        self.animation = AnimationState {
            frequency_count: 0,
            max_frequency_count: width * height,
            active_frequencies: Vec::new(),
            animating: self.config.animate,
            speed: self.config.animation_speed,
            elapsed: 0.0,
            mode: Some(mode),
        };
        self.held = Some(held);
        self.last_timings = ReconstructionTimings::new();

        info!(width, height, ?mode, "Spectrum loaded");
        self.events.emit(&VisualizerEvent::ImageLoaded { width, height, mode });
    }

    /// Reconstructs from the `count` strongest frequencies.
    ///
    /// `count` is clamped to `width * height`. Nothing is recomputed when the
    /// clamped count equals the current one or no image is held. Returns
    /// whether a new reconstruction was produced.
    #[instrument(level = "debug", skip(self))]
    pub fn set_frequency_count(&mut self, count: usize) -> bool {
        let Some(held) = self.held.as_mut() else {
            debug!("No spectrum held, ignoring frequency count");
            return false;
        };

        let max = self.animation.max_frequency_count;
        let count = count.min(max);
        if count == self.animation.frequency_count {
            return false;
        }

        let mut timings = ReconstructionTimings::new();
        let active = held.reconstruct(count, &self.config, &mut timings);
        timings.log_summary();

        self.animation.frequency_count = count;
        self.animation.active_frequencies = active;
        self.last_timings = timings;

        debug!(count, max, "Reconstruction updated");
        self.events.emit(&VisualizerEvent::FrequencyCountChanged { count, max });
        true
    }

    /// Advances the animation by `delta_time` seconds.
    ///
    /// Does nothing unless animation is enabled and an image is held.
    pub fn update_animation(&mut self, delta_time: Scalar) {
        if !self.animation.animating || self.held.is_none() {
            return;
        }

        self.animation.elapsed += delta_time * self.animation.speed;
        let target = sweep_target(
            self.animation.elapsed,
            self.config.frequencies_per_second,
            self.animation.max_frequency_count,
            self.config.sweep,
            self.config.easing,
        );
        trace!(elapsed = self.animation.elapsed, target, "Animation tick");

        if target != self.animation.frequency_count {
            self.set_frequency_count(target);
        }
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.animation.animating = animating;
    }

    pub fn set_animation_speed(&mut self, speed: Scalar) {
        self.animation.speed = speed;
    }

    /// Rewinds the sweep clock without touching the current reconstruction.
    pub fn reset_animation(&mut self) {
        self.animation.elapsed = 0.0;
    }

    pub fn state(&self) -> VisualizerState {
        match &self.held {
            None => VisualizerState::Idle,
            Some(_) if self.animation.frequency_count == 0 => VisualizerState::Loaded,
            Some(_) => VisualizerState::Reconstructing,
        }
    }

    pub fn mode(&self) -> Option<ImageMode> {
        self.held.as_ref().map(Held::mode)
    }

    pub fn animation_state(&self) -> &AnimationState {
        &self.animation
    }

    pub fn frequency_count(&self) -> usize {
        self.animation.frequency_count
    }

    pub fn max_frequency_count(&self) -> usize {
        self.animation.max_frequency_count
    }

    pub fn last_timings(&self) -> &ReconstructionTimings {
        &self.last_timings
    }

    /// Grayscale spectrum, or the representative channel in RGB mode.
    pub fn spectrum(&self) -> Option<&FrequencyImage> {
        self.held.as_ref().map(|held| held.representative(&self.config))
    }

    pub fn rgb_spectrum(&self) -> Option<&RgbFrequencyImage> {
        match &self.held {
            Some(Held::Rgb { spectrum, .. }) => Some(spectrum),
            _ => None,
        }
    }

    pub fn reconstructed_image(&self) -> Option<&SpatialImage> {
        match &self.held {
            Some(Held::Grayscale { reconstruction, .. }) => Some(reconstruction),
            _ => None,
        }
    }

    pub fn reconstructed_rgb_image(&self) -> Option<&RgbSpatialImage> {
        match &self.held {
            Some(Held::Rgb { reconstruction, .. }) => Some(reconstruction),
            _ => None,
        }
    }

    /// Full, unfiltered magnitude spectrum. Empty when idle.
    pub fn magnitude_spectrum(&self) -> Vec<Scalar> {
        self.spectrum().map(FrequencyImage::magnitude_image).unwrap_or_default()
    }

    /// Full, unfiltered phase spectrum. Empty when idle.
    pub fn phase_spectrum(&self) -> Vec<Scalar> {
        self.spectrum().map(FrequencyImage::phase_image).unwrap_or_default()
    }

    pub fn rgb_magnitude_spectra(&self) -> Option<[Vec<Scalar>; 3]> {
        self.rgb_spectrum().map(RgbFrequencyImage::magnitude_images)
    }

    /// Centered, log-scaled magnitude spectrum as gray levels, ready to upload as a texture.
    pub fn magnitude_spectrum_display(&self) -> Vec<u8> {
        let Some(spectrum) = self.spectrum() else {
            return Vec::new();
        };
        let mut centered = spectrum.clone();
        centered.fft_shift();
        let mut magnitude = centered.magnitude_image();
        log_scale(&mut magnitude);
        normalize_to_u8(&magnitude)
    }

    /// Active coordinates, strongest first.
    pub fn frequency_path(&self) -> Vec<(Scalar, Scalar)> {
        self.animation
            .active_frequencies
            .iter()
            .map(|&(x, y)| (x as Scalar, y as Scalar))
            .collect()
    }

    /// One segment per active frequency, from the canvas center to the
    /// frequency's position on a centered `canvas_width x canvas_height` plot.
    ///
    /// Coordinates are taken as signed frequencies, offset by half the image
    /// size, scaled to the canvas and clamped inside it.
    pub fn visualization_lines(&self, canvas_width: Scalar, canvas_height: Scalar) -> Vec<VisualizationLine> {
        let Some(spectrum) = self.spectrum() else {
            return Vec::new();
        };
        let (width, height) = spectrum.dimensions();
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let canvas_width = canvas_width.max(0.0);
        let canvas_height = canvas_height.max(0.0);
        let scale_x = canvas_width / width as Scalar;
        let scale_y = canvas_height / height as Scalar;
        let (center_x, center_y) = (canvas_width / 2.0, canvas_height / 2.0);

        self.animation
            .active_frequencies
            .iter()
            .map(|&(x, y)| {
                let u = signed_frequency(x, width) as Scalar;
                let v = signed_frequency(y, height) as Scalar;
                let sample = spectrum.at(x, y);
                VisualizationLine {
                    x1: center_x,
                    y1: center_y,
                    x2: ((u + width as Scalar / 2.0) * scale_x).clamp(0.0, canvas_width),
                    y2: ((v + height as Scalar / 2.0) * scale_y).clamp(0.0, canvas_height),
                    magnitude: sample.norm(),
                    phase: sample.arg(),
                    frequency: (u * u + v * v).sqrt(),
                }
            })
            .collect()
    }

    pub fn snapshot(&self) -> VisualizerSnapshot {
        VisualizerSnapshot {
            state: self.state(),
            animation: self.animation.clone(),
            reconstruction: self.held.as_ref().map(Held::reconstruction),
        }
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&VisualizerEvent) + Send + 'static,
    {
        self.events.subscribe(handler)
    }

    pub fn subscribe_channel(&mut self) -> (SubscriptionId, std::sync::mpsc::Receiver<VisualizerEvent>) {
        self.events.subscribe_channel()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}
