/// writes one bit into the least significant bit of a color channel sample
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

/// reads the least significant bit of a color channel sample
pub trait UnveilBit {
    fn unveil_bit(self) -> bool;
}

impl HideBit for &mut u8 {
    fn hide_bit(self, bit: bool) {
        if bit {
            *self |= 1;
        } else {
            *self &= 0b1111_1110;
        }
    }
}

impl UnveilBit for &u8 {
    fn unveil_bit(self) -> bool {
        *self & 1 == 1
    }
}
