//! One secret bit per color channel sample.
//!
//! The `i`-th secret byte occupies samples `i * 8 .. i * 8 + 8`, least significant bit
//! first. Pixel and channel boundaries play no role in the embedding, only in the
//! capacity diagnostic ([`capacity_report`]).

use std::num::NonZeroUsize;

use log::{debug, error};

use crate::bit_iterator::BitIterator;
use crate::error::SteganoError;
use crate::primitives::{HideBit, UnveilBit};
use crate::result::Result;

const BITS_PER_BYTE: usize = 8;

/// Pixel-granular numbers for the capacity error message.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CapacityReport {
    pub required_pixels: usize,
    pub available_pixels: usize,
}

/// Sample-granular feasibility: every secret bit needs one sample.
pub fn has_capacity(secret_len: usize, sample_count: usize) -> bool {
    secret_len
        .checked_mul(BITS_PER_BYTE)
        .is_some_and(|bits| bits <= sample_count)
}

pub fn capacity_report(
    secret_len: usize,
    sample_count: usize,
    channel_count: NonZeroUsize,
) -> CapacityReport {
    let channel_count = channel_count.get();
    let required_bits = secret_len.saturating_mul(BITS_PER_BYTE);

    CapacityReport {
        required_pixels: required_bits.div_ceil(channel_count),
        available_pixels: sample_count.div_ceil(channel_count),
    }
}

/// stateless LSB codec over a sample slice
pub struct LsbCodec;

impl LsbCodec {
    /// Embeds `secret` into the first `8 * secret.len()` samples.
    ///
    /// `channel_count` must be positive and is only used for the error report. Samples past the
    /// secret as well as bits 1..=7 of touched samples stay as they are.
    pub fn hide(secret: &[u8], samples: &mut [u8], channel_count: usize) -> Result<()> {
        let channel_count = NonZeroUsize::new(channel_count)
            .ok_or(SteganoError::InvalidChannelCount(channel_count))?;

        if !has_capacity(secret.len(), samples.len()) {
            let report = capacity_report(secret.len(), samples.len(), channel_count);
            error!(
                "Image is too small to store this secret: requires at least {} pixels but only has {}",
                report.required_pixels, report.available_pixels
            );

            return Err(SteganoError::CapacityError {
                required_pixels: report.required_pixels,
                available_pixels: report.available_pixels,
            });
        }

        BitIterator::new(secret.iter().copied())
            .zip(samples.iter_mut())
            .for_each(|(bit, sample)| sample.hide_bit(bit));

        debug!("secret embedded");
        Ok(())
    }

    /// Reads `length` bytes back from the sample LSBs.
    ///
    /// Fails with [`SteganoError::OutOfBounds`] if the samples cannot hold that many bits.
    /// That error is fatal, callers must stop using the carrier afterwards.
    pub fn recover(samples: &[u8], length: usize) -> Result<Vec<u8>> {
        let requested_bits = length.saturating_mul(BITS_PER_BYTE);
        if !has_capacity(length, samples.len()) {
            error!("Length of secret is out of bounds");

            return Err(SteganoError::OutOfBounds {
                requested_bits,
                available_samples: samples.len(),
            });
        }

        Ok(samples[..requested_bits]
            .chunks_exact(BITS_PER_BYTE)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .filter(|(_, sample)| sample.unveil_bit())
                    .fold(0u8, |byte, (bit, _)| byte | (1 << bit))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_hide_hi_into_24_zero_samples() {
        let mut samples = [0u8; 24];
        LsbCodec::hide(b"hi", &mut samples, 3).expect("Cannot hide `hi`");

        // 'h' = 0x68 = 0b0110_1000, 'i' = 0x69 = 0b0110_1001, low bit first
        assert_eq!(
            samples,
            [
                0, 0, 0, 1, 0, 1, 1, 0, //
                1, 0, 0, 1, 0, 1, 1, 0, //
                0, 0, 0, 0, 0, 0, 0, 0,
            ]
        );
        assert_eq!(LsbCodec::recover(&samples, 2).unwrap(), b"hi");
    }

    #[test]
    fn should_succeed_when_secret_needs_exactly_all_samples() {
        let mut samples = [0x55u8; 16];
        assert!(LsbCodec::hide(b"ok", &mut samples, 4).is_ok());
        assert_eq!(LsbCodec::recover(&samples, 2).unwrap(), b"ok");
    }

    #[test]
    fn should_fail_when_one_sample_is_missing() {
        let mut samples = [0x55u8; 15];
        let untouched = samples;

        match LsbCodec::hide(b"ok", &mut samples, 3) {
            Err(SteganoError::CapacityError {
                required_pixels,
                available_pixels,
            }) => {
                assert_eq!(required_pixels, 6);
                assert_eq!(available_pixels, 5);
            }
            other => panic!("expected a capacity error, got {other:?}"),
        }
        assert_eq!(samples, untouched, "nothing must be written on failure");
    }

    #[test]
    fn should_check_capacity_on_samples_not_on_pixels() {
        // 3 pixels when rounded up, but only the 10 real samples count
        assert!(!has_capacity(2, 10));
        assert!(has_capacity(1, 10));
        assert_eq!(
            capacity_report(2, 10, NonZeroUsize::new(4).unwrap()),
            CapacityReport {
                required_pixels: 4,
                available_pixels: 3
            }
        );
    }

    #[test]
    fn should_reject_zero_channels_without_writing() {
        let mut samples = [0u8; 16];

        assert!(matches!(
            LsbCodec::hide(b"ok", &mut samples, 0),
            Err(SteganoError::InvalidChannelCount(0))
        ));
        assert_eq!(samples, [0u8; 16]);
    }

    #[test]
    fn should_never_touch_upper_bits() {
        let mut samples = [0b1010_1010u8; 64];
        LsbCodec::hide(b"\xFF\x00\x5A", &mut samples, 4).unwrap();

        assert!(samples.iter().all(|s| s & 0b1111_1110 == 0b1010_1010));
    }

    #[test]
    fn should_leave_the_tail_untouched() {
        let mut samples: Vec<u8> = (0..=255).collect();
        let before = samples.clone();
        LsbCodec::hide(b"tail", &mut samples, 3).unwrap();

        assert_eq!(&samples[32..], &before[32..]);
    }

    #[test]
    fn should_hide_an_empty_secret_in_an_empty_buffer() {
        let mut samples: [u8; 0] = [];
        assert!(LsbCodec::hide(b"", &mut samples, 3).is_ok());
        assert_eq!(LsbCodec::recover(&samples, 0).unwrap(), b"");
    }

    #[test]
    fn recover_should_fail_fatally_when_out_of_bounds() {
        let samples = [0u8; 15];
        let err = LsbCodec::recover(&samples, 2).unwrap_err();

        assert!(err.is_fatal());
        assert!(matches!(
            err,
            SteganoError::OutOfBounds {
                requested_bits: 16,
                available_samples: 15
            }
        ));
    }

    #[test]
    fn should_round_trip_all_byte_values() {
        let secret: Vec<u8> = (0..=255).collect();
        let mut samples: Vec<u8> = (0..secret.len() * 8 + 7).map(|i| (i * 31) as u8).collect();

        LsbCodec::hide(&secret, &mut samples, 4).unwrap();
        assert_eq!(LsbCodec::recover(&samples, secret.len()).unwrap(), secret);
    }
}
