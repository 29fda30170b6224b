//! Fourier visualizer module
//!
//! Holds a spectrum, rebuilds its top-K reconstruction on demand, drives the
//! animated sweep over K and produces spectra and line segments for renderers.

mod animation;
mod events;
mod fourier_visualizer;
mod timing;
pub mod types;


pub use animation::sweep_target;
pub use events::{EventBus, SubscriptionId, VisualizerEvent};
pub use fourier_visualizer::FourierVisualizer;
pub use timing::{ReconstructionTimings, StepTiming, Timer};
pub use types::{
    AnimationState, Easing, ImageMode, Reconstruction, SweepMode, VisualizationLine, VisualizerConfig,
    VisualizerConfigBuilder, VisualizerSnapshot, VisualizerState,
};
