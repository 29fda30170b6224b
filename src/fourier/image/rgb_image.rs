//! Three-channel complex image with packed-pixel conversion.

use crate::fourier::common::error::{FourierError, Result};
use crate::fourier::image::complex_image::ComplexImage;
use crate::fourier::image::types::{Channel, Complex, Domain, Frequency, Scalar, Spatial};

/// Red, green and blue channels of identical size.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbComplexImage<D: Domain> {
    channels: [ComplexImage<D>; 3],
}

pub type RgbSpatialImage = RgbComplexImage<Spatial>;
pub type RgbFrequencyImage = RgbComplexImage<Frequency>;

impl<D: Domain> Default for RgbComplexImage<D> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<D: Domain> RgbComplexImage<D> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            channels: std::array::from_fn(|_| ComplexImage::new(width, height)),
        }
    }

    /// Assembles an image from `[red, green, blue]`, rejecting channels of different sizes.
    pub fn from_channels(channels: [ComplexImage<D>; 3]) -> Result<Self> {
        let expected = channels[0].dimensions();
        if let Some(odd) = channels.iter().find(|c| c.dimensions() != expected) {
            return Err(FourierError::DimensionMismatch {
                expected,
                found: odd.dimensions(),
            });
        }
        Ok(Self { channels })
    }

    /// For channels produced by size-preserving operations on an existing image.
    pub(crate) fn from_same_size_channels(channels: [ComplexImage<D>; 3]) -> Self {
        debug_assert!(channels.iter().all(|c| c.dimensions() == channels[0].dimensions()));
        Self { channels }
    }

    pub fn width(&self) -> usize {
        self.channels[0].width()
    }

    pub fn height(&self) -> usize {
        self.channels[0].height()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.channels[0].dimensions()
    }

    pub fn channel(&self, channel: Channel) -> &ComplexImage<D> {
        &self.channels[channel.index()]
    }

    /// Mutable samples of one channel. The channel's size cannot change through this slice.
    pub fn channel_data_mut(&mut self, channel: Channel) -> &mut [Complex] {
        self.channels[channel.index()].data_mut()
    }

    pub fn channels(&self) -> &[ComplexImage<D>; 3] {
        &self.channels
    }

    pub fn into_channels(self) -> [ComplexImage<D>; 3] {
        self.channels
    }

    pub fn magnitude_images(&self) -> [Vec<Scalar>; 3] {
        std::array::from_fn(|i| self.channels[i].magnitude_image())
    }
}

impl RgbSpatialImage {
    /// Unpacks `R << 24 | G << 16 | B << 8 | A` words into `[0, 1]` channels.
    ///
    /// The low byte is ignored.
    pub fn from_rgb(pixels: &[u32], width: usize, height: usize) -> Result<Self> {
        let mut image = Self::new(0, 0);
        image.set_from_rgb(pixels, width, height)?;
        Ok(image)
    }

    pub fn set_from_rgb(&mut self, pixels: &[u32], width: usize, height: usize) -> Result<()> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(FourierError::BufferLength {
                expected,
                found: pixels.len(),
            });
        }

        let mut channels: [ComplexImage<Spatial>; 3] =
            std::array::from_fn(|_| ComplexImage::new(width, height));
        for (channel, image) in Channel::ALL.into_iter().zip(channels.iter_mut()) {
            for (sample, &word) in image.data_mut().iter_mut().zip(pixels) {
                let byte = (word >> channel.shift()) & 0xFF;
                *sample = Complex::new(Scalar::from(byte) / 255.0, 0.0);
            }
        }
        self.channels = channels;
        Ok(())
    }

    /// Packs the clamped real parts back into words with alpha fixed at `0xFF`.
    pub fn to_rgb(&self) -> Vec<u32> {
        let [red, green, blue] = &self.channels;
        red.data()
            .iter()
            .zip(green.data())
            .zip(blue.data())
            .map(|((r, g), b)| {
                (to_byte(r.re) << Channel::Red.shift())
                    | (to_byte(g.re) << Channel::Green.shift())
                    | (to_byte(b.re) << Channel::Blue.shift())
                    | 0xFF
            })
            .collect()
    }
}

#[inline]
fn to_byte(value: Scalar) -> u32 {
    (value.clamp(0.0, 1.0) * 255.0) as u8 as u32
}
