use std::path::Path;

use log::info;

use crate::image_container::{ImageContainer, DEFAULT_CHANNEL_COUNT};
use crate::media::png::RGBA_CHANNELS;
use crate::media::MediaFormat;
use crate::result::Result;

pub const DEMO_MESSAGE: &str = "Hiding in plain sight";

/// Loads a carrier by its file extension, PNG carriers are always RGBA.
pub fn load(carrier: &Path, channels: Option<usize>) -> Result<ImageContainer> {
    let image = match MediaFormat::from_path(carrier)? {
        MediaFormat::Png => {
            let mut image = ImageContainer::new(RGBA_CHANNELS)?;
            image.load_png(carrier)?;
            image
        }
        MediaFormat::Ppm => {
            let mut image = ImageContainer::new(channels.unwrap_or(DEFAULT_CHANNEL_COUNT))?;
            image.load_ppm(carrier)?;
            image
        }
    };
    info!(
        "loaded {carrier:?} with {}x{} pixels",
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Stores a carrier by its file extension, committing PNG pixel data first.
pub fn save(image: &mut ImageContainer, output: &Path) -> Result<()> {
    match MediaFormat::from_path(output)? {
        MediaFormat::Png => {
            image.commit_png()?;
            image.save_png(output)
        }
        MediaFormat::Ppm => image.save_ppm(output),
    }
}

pub fn hide(carrier: &Path, output: &Path, message: &str, channels: Option<usize>) -> Result<()> {
    let mut image = load(carrier, channels)?;
    image.hide_lsb(message.as_bytes())?;
    save(&mut image, output)?;
    info!("hid {} bytes in {output:?}", message.len());

    Ok(())
}

pub fn unveil(carrier: &Path, length: usize, channels: Option<usize>) -> Result<Vec<u8>> {
    load(carrier, channels)?.find_lsb(length)
}

/// Hides `message` in `input`, writes `output`, reads it back and returns what was recovered.
pub fn demo(input: &Path, output: &Path, message: &str) -> Result<Vec<u8>> {
    let mut image = ImageContainer::new(RGBA_CHANNELS)?;
    image.load_png(input)?;
    image.hide_lsb(message.as_bytes())?;
    info!("Secret hidden.");
    image.commit_png()?;
    image.save_png(output)?;

    let mut secret_file = ImageContainer::new(RGBA_CHANNELS)?;
    secret_file.load_png(output)?;

    secret_file.find_lsb(message.len())
}
