//! Visualizer configuration and the values it hands to renderers

use crate::fourier::image::{Channel, RgbSpatialImage, Scalar, SpatialImage};
use crate::fourier::transform::Execution;

/// How the animation sweeps the frequency count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepMode {
    /// Linear ramp from zero to the maximum, then hold
    Once,
    /// Ramp to the maximum, then restart from zero
    Loop,
    /// Ramp up and back down indefinitely
    #[default]
    PingPong,
}

/// Timing curve applied to the sweep phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// `3t^2 - 2t^3`
    #[default]
    SmoothStep,
    /// Ease-in-out cubic
    Cubic,
}

/// Which kind of image the visualizer is holding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    Grayscale,
    Rgb,
}

/// Lifecycle of a visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizerState {
    /// No spectrum held
    Idle,
    /// Spectrum held, zero frequencies active
    Loaded,
    /// Spectrum held and a reconstruction from the top frequencies computed
    Reconstructing,
}

/// Configuration for a [`FourierVisualizer`](super::FourierVisualizer)
#[derive(Debug, Clone)]
pub struct VisualizerConfig {
    /// Multiplier applied to every animation tick
    pub animation_speed: Scalar,
    /// Frequencies added per second of scaled animation time
    pub frequencies_per_second: Scalar,
    /// Shape of the animation sweep
    pub sweep: SweepMode,
    /// Easing applied to repeating sweeps (`Once` is always linear)
    pub easing: Easing,
    /// Scheduling of the per-channel work in RGB mode
    pub execution: Execution,
    /// Channel whose frequencies are reported as active in RGB mode
    pub representative_channel: Channel,
    /// Whether the animation runs as soon as an image is loaded
    pub animate: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            animation_speed: 1.0,
            frequencies_per_second: 10.0,
            sweep: SweepMode::PingPong,
            easing: Easing::SmoothStep,
            execution: Execution::Parallel,
            representative_channel: Channel::Red,
            animate: false,
        }
    }
}

impl VisualizerConfig {
    pub fn builder() -> VisualizerConfigBuilder {
        VisualizerConfigBuilder::default()
    }
}

/// Builder for VisualizerConfig
#[derive(Default)]
pub struct VisualizerConfigBuilder {
    animation_speed: Option<Scalar>,
    frequencies_per_second: Option<Scalar>,
    sweep: Option<SweepMode>,
    easing: Option<Easing>,
    execution: Option<Execution>,
    representative_channel: Option<Channel>,
    animate: Option<bool>,
}

impl VisualizerConfigBuilder {
    pub fn animation_speed(mut self, speed: Scalar) -> Self {
        self.animation_speed = Some(speed);
        self
    }

    pub fn frequencies_per_second(mut self, rate: Scalar) -> Self {
        self.frequencies_per_second = Some(rate);
        self
    }

    pub fn sweep(mut self, sweep: SweepMode) -> Self {
        self.sweep = Some(sweep);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = Some(execution);
        self
    }

    pub fn representative_channel(mut self, channel: Channel) -> Self {
        self.representative_channel = Some(channel);
        self
    }

    pub fn animate(mut self, enable: bool) -> Self {
        self.animate = Some(enable);
        self
    }

    pub fn build(self) -> VisualizerConfig {
        let default = VisualizerConfig::default();
        VisualizerConfig {
            animation_speed: self.animation_speed.unwrap_or(default.animation_speed),
            frequencies_per_second: self.frequencies_per_second.unwrap_or(default.frequencies_per_second),
            sweep: self.sweep.unwrap_or(default.sweep),
            easing: self.easing.unwrap_or(default.easing),
            execution: self.execution.unwrap_or(default.execution),
            representative_channel: self.representative_channel.unwrap_or(default.representative_channel),
            animate: self.animate.unwrap_or(default.animate),
        }
    }
}

/// Frequency selection and animation progress of the current image
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationState {
    /// Number of frequencies used by the current reconstruction
    pub frequency_count: usize,
    /// `width * height` of the held spectrum
    pub max_frequency_count: usize,
    /// Selected coordinates, strongest first
    pub active_frequencies: Vec<(usize, usize)>,
    pub animating: bool,
    pub speed: Scalar,
    /// Accumulated `delta_time * speed`
    pub elapsed: Scalar,
    pub mode: Option<ImageMode>,
}

/// Screen-space segment from the canvas center to one active frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualizationLine {
    pub x1: Scalar,
    pub y1: Scalar,
    pub x2: Scalar,
    pub y2: Scalar,
    pub magnitude: Scalar,
    pub phase: Scalar,
    /// Radial frequency `sqrt(u^2 + v^2)` of the signed coordinate
    pub frequency: Scalar,
}

/// Spatial-domain result of the latest reconstruction
#[derive(Debug, Clone, PartialEq)]
pub enum Reconstruction {
    Grayscale(SpatialImage),
    Rgb(RgbSpatialImage),
}

/// Owned copy of everything a renderer reads from a visualizer
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerSnapshot {
    pub state: VisualizerState,
    pub animation: AnimationState,
    pub reconstruction: Option<Reconstruction>,
}
