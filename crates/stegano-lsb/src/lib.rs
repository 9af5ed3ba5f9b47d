//! # Stegano LSB
//!
//! Hides short secrets in the least significant bit of every color channel sample of
//! an image, and reads them back. Carriers are PNG files (always RGBA) or plain
//! text PPM files (`P3`).
//!
//! # Usage Examples
//!
//! ## Hide and recover a secret in memory
//!
//! ```rust
//! use stegano_lsb::ImageContainer;
//!
//! let mut image = ImageContainer::with_pixels(4, 2, 3, vec![0x80; 24]).expect("Invalid channel count");
//! image.hide_lsb(b"hi").expect("Image is too small");
//!
//! assert_eq!(image.find_lsb(2).expect("Out of bounds"), b"hi");
//! ```
//!
//! ## Hide a secret in a PNG
//!
//! ```rust,no_run
//! use stegano_lsb::ImageContainer;
//!
//! let mut image = ImageContainer::new(4).expect("Invalid channel count");
//! image.load_png("carrier.png").expect("Cannot load carrier");
//! image.hide_lsb(b"Hiding in plain sight").expect("Image is too small");
//! image.commit_png().expect("Cannot commit pixel data");
//! image.save_png("carrier-with-secret.png").expect("Cannot save image");
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod commands;
pub mod error;
pub mod image_container;
pub mod lsb_codec;
pub mod media;
pub mod pixel_buffer;
pub mod primitives;
pub mod result;
pub mod scanner;

pub use crate::error::SteganoError;
pub use crate::image_container::ImageContainer;
pub use crate::lsb_codec::LsbCodec;
pub use crate::pixel_buffer::PixelBuffer;
pub use crate::primitives::{HideBit, UnveilBit};
pub use crate::result::Result;
