use std::path::Path;

use crate::error::SteganoError;
use crate::result::Result;

/// carrier formats, derived from the file extension
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MediaFormat {
    Png,
    Ppm,
}

impl MediaFormat {
    pub fn from_path(f: &Path) -> Result<Self> {
        let ext = f
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or(SteganoError::UnsupportedMedia)?
            .to_lowercase();

        match ext.as_str() {
            "png" => Ok(Self::Png),
            "ppm" => Ok(Self::Ppm),
            _ => Err(SteganoError::UnsupportedMedia),
        }
    }
}
