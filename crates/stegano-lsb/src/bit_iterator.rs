/// Yields the bits of a byte sequence, least significant bit first.
///
/// `0b0110_1000` (`h`) becomes `0, 0, 0, 1, 0, 1, 1, 0`.
pub struct BitIterator<I> {
    bytes: I,
    byte: u8,
    bit: u8,
}

impl<I> BitIterator<I>
where
    I: Iterator<Item = u8>,
{
    pub fn new<T: IntoIterator<IntoIter = I>>(bytes: T) -> Self {
        BitIterator {
            bytes: bytes.into_iter(),
            byte: 0,
            bit: 8,
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Iterator<Item = u8>,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bit == 8 {
            self.byte = self.bytes.next()?;
            self.bit = 0;
        }
        let bit = (self.byte >> self.bit) & 1 == 1;
        self.bit += 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = (8 - self.bit) as usize;
        let (lo, hi) = self.bytes.size_hint();
        (
            lo.saturating_mul(8).saturating_add(pending),
            hi.and_then(|h| h.checked_mul(8)?.checked_add(pending)),
        )
    }
}
