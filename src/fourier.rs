//! 2D Fourier reconstruction core
//!
//! Complex images in tagged spatial and frequency domains, the transform
//! engine operating on them, helper processing, and the visualizer that
//! progressively rebuilds an image from its strongest frequencies.

pub mod common;
pub mod image;
pub mod processing;
pub mod transform;
pub mod visualizer;

pub use common::{
    FourierError,
    Result,
};

pub use image::{
    Channel,
    Complex,
    ComplexImage,
    Domain,
    Frequency,
    FrequencyImage,
    RgbComplexImage,
    RgbFrequencyImage,
    RgbSpatialImage,
    Scalar,
    Spatial,
    SpatialImage,
};

pub use transform::{
    Direction,
    Execution,
    forward_2d,
    forward_rgb_2d,
    inverse_2d,
    inverse_rgb_2d,
    keep_top_frequencies,
    keep_top_frequencies_rgb,
    top_frequency_indices,
};

pub use visualizer::{
    FourierVisualizer,
    VisualizerConfig,
    VisualizerConfigBuilder,
    VisualizerEvent,
};
