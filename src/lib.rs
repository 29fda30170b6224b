pub mod fourier;
pub mod logger;
