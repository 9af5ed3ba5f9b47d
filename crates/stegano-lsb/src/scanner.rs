use crate::error::SteganoError;
use crate::result::Result;

/// Scans the next unsigned decimal integer and advances `text` past it.
///
/// Everything up to the first ASCII digit is skipped. Overflow wraps silently.
pub fn parse_one_integer(text: &mut &str) -> Result<usize> {
    let start = text
        .find(|c: char| c.is_ascii_digit())
        .ok_or(SteganoError::NoDigitsFound)?;
    let digits = &text[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    let number = digits[..end].bytes().fold(0usize, |n, d| {
        n.wrapping_mul(10).wrapping_add((d - b'0') as usize)
    });
    *text = &digits[end..];

    Ok(number)
}
