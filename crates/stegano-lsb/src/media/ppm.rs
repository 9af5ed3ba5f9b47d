//! Plain PPM (`P3`) reader and writer.
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! <s0> <s1> ... <sN>
//! ```
//!
//! All samples sit on one line. The number of samples per pixel is not part of the
//! format, the reader is told how many to expect.

use std::io::{BufRead, Lines, Write};

use log::debug;

use crate::error::SteganoError;
use crate::result::Result;
use crate::scanner::parse_one_integer;

pub const MAGIC: &str = "P3";
pub const MAX_COLOR_VALUE: &str = "255";

#[derive(Debug, Eq, PartialEq)]
pub struct PpmImage {
    pub width: usize,
    pub height: usize,
    pub samples: Vec<u8>,
}

pub fn read<R: BufRead>(reader: R, channel_count: usize) -> Result<PpmImage> {
    if channel_count == 0 {
        return Err(SteganoError::InvalidChannelCount(channel_count));
    }
    let mut lines = reader.lines();

    let magic = next_line(&mut lines)?;
    if magic != MAGIC {
        return Err(SteganoError::BadMagic(magic));
    }

    let dimensions = next_line(&mut lines)?;
    let (width, height) = parse_dimensions(&dimensions)?;

    let max_color_value = next_line(&mut lines)?;
    if max_color_value != MAX_COLOR_VALUE {
        return Err(SteganoError::BadHeader(max_color_value));
    }

    let expected = channel_count.saturating_mul(width).saturating_mul(height);
    let data = if expected > 0 {
        next_line(&mut lines)?
    } else {
        String::new()
    };
    let samples = parse_samples(&data, expected)?;

    debug!("read {width}x{height} ppm image with {} samples", samples.len());
    Ok(PpmImage {
        width,
        height,
        samples,
    })
}

pub fn write<W: Write>(mut writer: W, width: usize, height: usize, samples: &[u8]) -> Result<()> {
    writeln!(writer, "{MAGIC}")?;
    writeln!(writer, "{width} {height}")?;
    writeln!(writer, "{MAX_COLOR_VALUE}")?;

    if width == 0 || height == 0 {
        writer.flush()?;
        return Ok(());
    }

    for (i, sample) in samples.iter().enumerate() {
        if i > 0 {
            writer.write_all(b" ")?;
        }
        write!(writer, "{sample}")?;
    }
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

/// a missing line reads as empty
fn next_line<B: BufRead>(lines: &mut Lines<B>) -> Result<String> {
    Ok(lines.next().transpose()?.unwrap_or_default())
}

fn parse_dimensions(line: &str) -> Result<(usize, usize)> {
    let mut cursor = line;
    let width = parse_one_integer(&mut cursor).map_err(|e| SteganoError::ParseError(e.into()))?;
    let height = parse_one_integer(&mut cursor).map_err(|e| SteganoError::ParseError(e.into()))?;

    Ok((width, height))
}

fn parse_samples(line: &str, expected: usize) -> Result<Vec<u8>> {
    let mut cursor = line;
    let mut samples = Vec::new();

    while samples.len() < expected {
        match parse_one_integer(&mut cursor) {
            Ok(n) => samples.push(n as u8),
            Err(SteganoError::NoDigitsFound) => {
                return Err(SteganoError::TruncatedData {
                    expected,
                    found: samples.len(),
                })
            }
            Err(e) => return Err(e),
        }
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_a_2x1_rgb_image() {
        let text = "P3\n2 1\n255\n255 0 0 0 128 7\n";
        let img = read(text.as_bytes(), 3).expect("Cannot read ppm");

        assert_eq!(
            img,
            PpmImage {
                width: 2,
                height: 1,
                samples: vec![255, 0, 0, 0, 128, 7]
            }
        );
    }

    #[test]
    fn should_not_read_with_zero_channels() {
        let text = "P3\n2 2\n255\n1 2 3 4 5 6 7 8 9 10 11 12\n";

        assert!(matches!(
            read(text.as_bytes(), 0),
            Err(SteganoError::InvalidChannelCount(0))
        ));
    }

    #[test]
    fn should_accept_crlf_line_endings() {
        let text = "P3\r\n1 1\r\n255\r\n1 2 3\r\n";
        let img = read(text.as_bytes(), 3).unwrap();

        assert_eq!(img.samples, vec![1, 2, 3]);
    }

    #[test]
    fn should_narrow_samples_to_a_byte() {
        let text = "P3\n1 1\n255\n256 257 300\n";
        let img = read(text.as_bytes(), 3).unwrap();

        assert_eq!(img.samples, vec![0, 1, 44]);
    }

    #[test]
    fn should_ignore_extra_samples() {
        let text = "P3\n1 1\n255\n1 2 3 4 5\n";
        let img = read(text.as_bytes(), 3).unwrap();

        assert_eq!(img.samples, vec![1, 2, 3]);
    }

    #[test]
    fn should_reject_a_binary_magic() {
        let text = "P6\nnot even dimensions\n255\n";

        match read(text.as_bytes(), 3) {
            Err(SteganoError::BadMagic(m)) => assert_eq!(m, "P6"),
            other => panic!("expected bad magic, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_an_empty_file() {
        assert!(matches!(
            read("".as_bytes(), 3),
            Err(SteganoError::BadMagic(_))
        ));
    }

    #[test]
    fn should_reject_incomplete_dimensions() {
        let text = "P3\n12\n255\n";

        match read(text.as_bytes(), 3) {
            Err(SteganoError::ParseError(inner)) => {
                assert!(matches!(*inner, SteganoError::NoDigitsFound))
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_other_max_color_values() {
        let text = "P3\n1 1\n65535\n1 2 3\n";

        match read(text.as_bytes(), 3) {
            Err(SteganoError::BadHeader(h)) => assert_eq!(h, "65535"),
            other => panic!("expected bad header, got {other:?}"),
        }
    }

    #[test]
    fn should_report_truncated_pixel_data() {
        let text = "P3\n2 2\n255\n1 2 3 4 5 \n";

        match read(text.as_bytes(), 3) {
            Err(SteganoError::TruncatedData { expected, found }) => {
                assert_eq!(expected, 12);
                assert_eq!(found, 5);
            }
            other => panic!("expected truncated data, got {other:?}"),
        }
    }

    #[test]
    fn should_report_a_missing_data_line_as_truncated() {
        let text = "P3\n1 1\n255\n";

        assert!(matches!(
            read(text.as_bytes(), 3),
            Err(SteganoError::TruncatedData {
                expected: 3,
                found: 0
            })
        ));
    }

    #[test]
    fn should_write_an_empty_image_as_three_lines() {
        let mut out = Vec::new();
        write(&mut out, 0, 0, &[]).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "P3\n0 0\n255\n");
    }

    #[test]
    fn should_write_samples_separated_by_single_spaces() {
        let mut out = Vec::new();
        write(&mut out, 2, 1, &[255, 0, 0, 0, 128, 7]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "P3\n2 1\n255\n255 0 0 0 128 7\n"
        );
    }
}
