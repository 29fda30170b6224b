use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FourierError {
    #[error("Coordinate ({x}, {y}) is outside a {width}x{height} image")]
    InvalidCoordinate {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Buffer length mismatch: expected {expected} samples, found {found}")]
    BufferLength { expected: usize, found: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),
}

pub type Result<T> = std::result::Result<T, FourierError>;
