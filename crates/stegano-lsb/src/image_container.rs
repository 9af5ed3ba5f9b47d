use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, error};

use crate::error::SteganoError;
use crate::lsb_codec::LsbCodec;
use crate::media::{ppm, DecodedImage, ImageCodec, PngCodec};
use crate::pixel_buffer::PixelBuffer;
use crate::result::Result;

pub const DEFAULT_CHANNEL_COUNT: usize = 3;

/// An image as a flat [`PixelBuffer`] plus its shape.
///
/// The channel count is fixed for the lifetime of the container. Width and height only
/// change as a whole, by a successful load.
///
/// For codec based formats the container keeps its own copy of the decoded image
/// (the codec descriptor). Mutations of the pixel data only reach that copy through
/// [`ImageContainer::commit_png`], which therefore has to be called between
/// [`ImageContainer::hide_lsb`] and [`ImageContainer::save_png`].
#[derive(Debug, Clone)]
pub struct ImageContainer {
    width: usize,
    height: usize,
    channel_count: usize,
    pixels: PixelBuffer,
    descriptor: Option<DecodedImage>,
}

impl Default for ImageContainer {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            channel_count: DEFAULT_CHANNEL_COUNT,
            pixels: PixelBuffer::new(),
            descriptor: None,
        }
    }
}

impl ImageContainer {
    /// Fails with [`SteganoError::InvalidChannelCount`] for zero channels.
    pub fn new(channel_count: usize) -> Result<Self> {
        Self::with_pixels(0, 0, channel_count, Vec::new())
    }

    pub fn with_pixels(
        width: usize,
        height: usize,
        channel_count: usize,
        samples: Vec<u8>,
    ) -> Result<Self> {
        if channel_count == 0 {
            error!("Image needs at least one channel per pixel");
            return Err(SteganoError::InvalidChannelCount(channel_count));
        }

        Ok(Self {
            width,
            height,
            channel_count,
            pixels: PixelBuffer::from_samples(samples),
            descriptor: None,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    pub fn pixel_data(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn pixel_data_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    /// number of samples the current dimensions demand
    pub fn expected_samples(&self) -> usize {
        self.channel_count
            .saturating_mul(self.width)
            .saturating_mul(self.height)
    }

    /// Hides `secret` in the least significant bits of the pixel data.
    pub fn hide_lsb(&mut self, secret: &[u8]) -> Result<()> {
        LsbCodec::hide(secret, self.pixels.as_mut_slice(), self.channel_count)
    }

    /// Recovers `length` bytes hidden by [`ImageContainer::hide_lsb`].
    ///
    /// An [`SteganoError::OutOfBounds`] error is fatal: the container must be dropped.
    pub fn find_lsb(&self, length: usize) -> Result<Vec<u8>> {
        LsbCodec::recover(self.pixels.as_slice(), length)
    }

    pub fn load_png(&mut self, file: impl AsRef<Path>) -> Result<()> {
        self.load_with(&PngCodec, file)
    }

    pub fn save_png(&self, file: impl AsRef<Path>) -> Result<()> {
        self.save_with(&PngCodec, file)
    }

    pub fn commit_png(&mut self) -> Result<()> {
        self.commit_for(&PngCodec)
    }

    /// Loads an image through `codec`, the channel count has to match the codec.
    pub fn load_with<C: ImageCodec + ?Sized>(
        &mut self,
        codec: &C,
        file: impl AsRef<Path>,
    ) -> Result<()> {
        self.ensure_channel_count(codec)?;

        let decoded = codec.decode(file.as_ref())?;
        self.width = decoded.width;
        self.height = decoded.height;
        self.pixels.replace(decoded.samples.clone());
        self.descriptor = Some(decoded);

        Ok(())
    }

    /// Copies the pixel data into the codec descriptor, so that a following save sees it.
    pub fn commit_for<C: ImageCodec + ?Sized>(&mut self, codec: &C) -> Result<()> {
        self.ensure_channel_count(codec)?;

        let expected = self.expected_samples();
        if self.pixels.len() < expected {
            error!("commit failed: size of pixel data and of the image do not match");
            return Err(SteganoError::BufferSizeMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }

        self.descriptor = Some(DecodedImage {
            width: self.width,
            height: self.height,
            samples: self.pixels[..expected].to_vec(),
        });

        Ok(())
    }

    /// Writes the committed codec descriptor through `codec`.
    pub fn save_with<C: ImageCodec + ?Sized>(
        &self,
        codec: &C,
        file: impl AsRef<Path>,
    ) -> Result<()> {
        let descriptor = self.descriptor.as_ref().ok_or(SteganoError::NothingToSave)?;

        codec.encode(
            file.as_ref(),
            descriptor.width,
            descriptor.height,
            &descriptor.samples,
        )
    }

    pub fn load_ppm(&mut self, file: impl AsRef<Path>) -> Result<()> {
        let f = File::open(file.as_ref())?;
        self.read_ppm(BufReader::new(f))
    }

    pub fn save_ppm(&self, file: impl AsRef<Path>) -> Result<()> {
        let file = file.as_ref();
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::IoError(e)
        })?;
        self.write_ppm(BufWriter::new(f))
    }

    pub fn read_ppm<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let image = ppm::read(reader, self.channel_count)?;

        self.width = image.width;
        self.height = image.height;
        self.pixels.replace(image.samples);
        self.pixels.reserve(self.expected_samples());
        debug!("loaded {}x{} ppm image", self.width, self.height);

        Ok(())
    }

    pub fn write_ppm<W: Write>(&self, writer: W) -> Result<()> {
        ppm::write(writer, self.width, self.height, self.pixels.as_slice())
    }

    fn ensure_channel_count<C: ImageCodec + ?Sized>(&self, codec: &C) -> Result<()> {
        if self.channel_count != codec.channel_count() {
            error!(
                "Image is not in expected format: requires {} channels per pixel but has {}",
                codec.channel_count(),
                self.channel_count
            );
            return Err(SteganoError::FormatMismatch {
                expected: codec.channel_count(),
                actual: self.channel_count,
            });
        }

        Ok(())
    }
}
