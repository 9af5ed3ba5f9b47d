use std::ops::{Deref, DerefMut};

/// Channel samples of an image in row-major, channel-interleaved order.
///
/// Sample `i` of pixel `p` lives at `p * channel_count + i`. The buffer knows nothing
/// about the shape, that is owned by [`crate::ImageContainer`].
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct PixelBuffer {
    samples: Vec<u8>,
}

impl PixelBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_samples(samples: Vec<u8>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.samples.capacity()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.samples
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// capacity hint only, the length is left untouched
    pub fn reserve(&mut self, total_samples: usize) {
        self.samples
            .reserve(total_samples.saturating_sub(self.samples.len()));
    }

    /// bulk replace, as done by a load
    pub fn replace(&mut self, samples: Vec<u8>) {
        self.samples = samples;
    }
}

impl From<Vec<u8>> for PixelBuffer {
    fn from(samples: Vec<u8>) -> Self {
        Self::from_samples(samples)
    }
}

impl Deref for PixelBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl DerefMut for PixelBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}
