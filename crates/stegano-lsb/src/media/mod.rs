pub mod png;
pub mod ppm;
mod types;

use std::path::Path;

pub use png::PngCodec;
pub use types::*;

use crate::result::Result;

/// Raw output of an [`ImageCodec`], samples are interleaved in the codec's channel layout.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub samples: Vec<u8>,
}

/// A file format adapter that turns files into samples and back.
pub trait ImageCodec {
    /// samples per pixel the codec produces and consumes
    fn channel_count(&self) -> usize;

    fn decode(&self, path: &Path) -> Result<DecodedImage>;

    fn encode(&self, path: &Path, width: usize, height: usize, samples: &[u8]) -> Result<()>;
}
