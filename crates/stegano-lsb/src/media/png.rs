use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{ColorType, ImageFormat};
use log::{debug, error};

use super::{DecodedImage, ImageCodec};
use crate::error::SteganoError;
use crate::result::Result;

pub const RGBA_CHANNELS: usize = 4;

/// PNG codec adapter backed by the `image` crate, always hands out RGBA samples.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn channel_count(&self) -> usize {
        RGBA_CHANNELS
    }

    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        let file = File::open(path).map_err(|e| {
            error!("Error opening {path:?}: {e}");
            SteganoError::DecodeError(e.to_string())
        })?;
        let img = image::load(BufReader::new(file), ImageFormat::Png)
            .map_err(|e| {
                error!("Error decoding {path:?}: {e}");
                SteganoError::DecodeError(e.to_string())
            })?
            .to_rgba8();

        let (width, height) = img.dimensions();
        debug!("decoded {width}x{height} png from {path:?}");

        Ok(DecodedImage {
            width: width as usize,
            height: height as usize,
            samples: img.into_raw(),
        })
    }

    fn encode(&self, path: &Path, width: usize, height: usize, samples: &[u8]) -> Result<()> {
        let expected = RGBA_CHANNELS
            .checked_mul(width)
            .and_then(|n| n.checked_mul(height))
            .ok_or_else(|| {
                SteganoError::WriteError(format!("image dimensions {width}x{height} are too large"))
            })?;
        if samples.len() != expected {
            return Err(SteganoError::WriteError(format!(
                "expected {expected} RGBA samples for {width}x{height} but got {}",
                samples.len()
            )));
        }
        let w = u32::try_from(width).map_err(|e| SteganoError::WriteError(e.to_string()))?;
        let h = u32::try_from(height).map_err(|e| SteganoError::WriteError(e.to_string()))?;

        image::save_buffer_with_format(path, samples, w, h, ColorType::Rgba8, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image {path:?}: {e}");
                SteganoError::WriteError(e.to_string())
            })?;

        debug!("wrote {width}x{height} png to {path:?}");
        Ok(())
    }
}
