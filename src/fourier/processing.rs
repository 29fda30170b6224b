//! Image processing helpers
//!
//! Padding, display normalization and spatial filters that sit around the
//! transform: preparing inputs for the radix-2 path and turning spectra into
//! something a renderer can show.

mod display;
mod filters;
mod padding;


pub use display::{color_map, log_scale, normalize_to_u8, normalize_to_unit};
pub use filters::{gaussian_blur, sobel_edges};
pub use padding::{crop, pad_to_power_of_two};
