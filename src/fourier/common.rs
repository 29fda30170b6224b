//! Common utilities module
//!
//! This module contains shared utilities used across the Fourier core.

pub mod error;

pub use error::{FourierError, Result};
