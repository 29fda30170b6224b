//! Dense row-major grid of complex samples.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::fourier::common::error::{FourierError, Result};
use crate::fourier::image::types::{Complex, Domain, Frequency, NORMALIZE_EPSILON, Scalar, Spatial, ZERO};
use crate::fourier::processing::normalize_to_u8;

/// A `width x height` grid of complex samples tagged with the domain it lives in.
///
/// The buffer always holds exactly `width * height` samples. Indexing with
/// `(x, y)` outside the grid is a caller bug: debug builds panic, release
/// builds panic only when the offset leaves the buffer. Use [`ComplexImage::get`] or
/// [`ComplexImage::try_at`] when the coordinate is not known to be valid.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexImage<D: Domain> {
    width: usize,
    height: usize,
    data: Vec<Complex>,
    domain: PhantomData<D>,
}

/// Image holding pixel-space samples.
pub type SpatialImage = ComplexImage<Spatial>;

/// Image holding Fourier coefficients.
pub type FrequencyImage = ComplexImage<Frequency>;

impl<D: Domain> Default for ComplexImage<D> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<D: Domain> ComplexImage<D> {
    /// Zero-filled image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![ZERO; width * height],
            domain: PhantomData,
        }
    }

    /// Wraps an existing row-major buffer.
    pub fn from_samples(data: Vec<Complex>, width: usize, height: usize) -> Result<Self> {
        let expected = width * height;
        if data.len() != expected {
            return Err(FourierError::BufferLength {
                expected,
                found: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
            domain: PhantomData,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of samples, `width * height`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reallocates the buffer for the new size.
    ///
    /// Existing samples keep their buffer offset, not their `(x, y)` position,
    /// so changing the width shears the content. Added samples are zero.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.data.resize(width * height, ZERO);
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) outside {}x{}", self.width, self.height);
        y * self.width + x
    }

    /// Sample at `(x, y)`. The coordinate must be inside the image.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> Complex {
        self.data[self.offset(x, y)]
    }

    /// Mutable sample at `(x, y)`. The coordinate must be inside the image.
    #[inline]
    pub fn at_mut(&mut self, x: usize, y: usize) -> &mut Complex {
        let offset = self.offset(x, y);
        &mut self.data[offset]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Complex> {
        if x < self.width && y < self.height {
            self.data.get(self.offset(x, y))
        } else {
            None
        }
    }

    pub fn try_at(&self, x: usize, y: usize) -> Result<Complex> {
        self.get(x, y).copied().ok_or(FourierError::InvalidCoordinate {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// `|sample|` for every pixel, row-major.
    pub fn magnitude_image(&self) -> Vec<Scalar> {
        self.data.iter().map(|c| c.norm()).collect()
    }

    /// `arg(sample)` for every pixel, row-major, in `[-pi, pi]`.
    pub fn phase_image(&self) -> Vec<Scalar> {
        self.data.iter().map(|c| c.arg()).collect()
    }

    /// Scales every sample so the largest magnitude becomes 1.0.
    ///
    /// Images whose peak magnitude is below [`NORMALIZE_EPSILON`] are left untouched.
    pub fn normalize(&mut self) {
        let peak = self.data.iter().map(|c| c.norm()).fold(0.0, Scalar::max);
        if peak < NORMALIZE_EPSILON {
            return;
        }

        let factor = 1.0 / peak;
        for sample in &mut self.data {
            *sample *= factor;
        }
    }

    pub fn data(&self) -> &[Complex] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [Complex] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<Complex> {
        self.data
    }

    /// Moves the samples into another domain without touching them.
    pub(crate) fn retag<E: Domain>(self) -> ComplexImage<E> {
        trace!(from = D::NAME, to = E::NAME, len = self.data.len(), "Retagging samples");
        ComplexImage {
            width: self.width,
            height: self.height,
            data: self.data,
            domain: PhantomData,
        }
    }

    /// Circular shift so that the sample at `(x, y)` moves to `(x + dx, y + dy)` modulo the size.
    fn roll(&mut self, dx: usize, dy: usize) {
        if self.is_empty() || (dx == 0 && dy == 0) {
            return;
        }

        let mut rolled = vec![ZERO; self.data.len()];
        for y in 0..self.height {
            let target_y = (y + dy) % self.height;
            for x in 0..self.width {
                let target_x = (x + dx) % self.width;
                rolled[target_y * self.width + target_x] = self.data[y * self.width + x];
            }
        }
        self.data = rolled;
    }
}

impl SpatialImage {
    /// Builds an image from 8-bit grayscale pixels, mapping `b` to `(b / 255, 0)`.
    pub fn from_grayscale(pixels: &[u8], width: usize, height: usize) -> Result<Self> {
        let mut image = Self::new(0, 0);
        image.set_from_grayscale(pixels, width, height)?;
        Ok(image)
    }

    pub fn set_from_grayscale(&mut self, pixels: &[u8], width: usize, height: usize) -> Result<()> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(FourierError::BufferLength {
                expected,
                found: pixels.len(),
            });
        }

        self.width = width;
        self.height = height;
        self.data = pixels
            .iter()
            .map(|&b| Complex::new(Scalar::from(b) / 255.0, 0.0))
            .collect();
        Ok(())
    }

    /// Min-max normalizes the real parts into `[0, 255]`.
    pub fn grayscale_from_real(&self) -> Vec<u8> {
        let reals: Vec<Scalar> = self.data.iter().map(|c| c.re).collect();
        normalize_to_u8(&reals)
    }
}

impl FrequencyImage {
    /// Moves the zero-frequency sample from `(0, 0)` to `(width / 2, height / 2)`.
    ///
    /// Implemented as a circular shift by the floored half sizes. For even
    /// dimensions this swaps diagonal quadrants and is its own inverse.
    pub fn fft_shift(&mut self) {
        let (dx, dy) = (self.width / 2, self.height / 2);
        self.roll(dx, dy);
    }

    /// Undoes [`FrequencyImage::fft_shift`] for any dimensions.
    pub fn ifft_shift(&mut self) {
        let (dx, dy) = (self.width - self.width / 2, self.height - self.height / 2);
        self.roll(dx, dy);
    }
}

impl<D: Domain> Index<(usize, usize)> for ComplexImage<D> {
    type Output = Complex;

    fn index(&self, (x, y): (usize, usize)) -> &Complex {
        &self.data[self.offset(x, y)]
    }
}

impl<D: Domain> IndexMut<(usize, usize)> for ComplexImage<D> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Complex {
        let offset = self.offset(x, y);
        &mut self.data[offset]
    }
}
