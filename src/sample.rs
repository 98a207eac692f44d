//! Raw 12-bit conversion results.

/// Unscaled 12-bit conversion result in `0..=4095`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample(u16);

impl RawSample {
    /// Lowest code the converter produces.
    pub const ZERO: Self = Self(0);
    /// Highest code the converter produces.
    pub const MAX: Self = Self(Self::FULL_SCALE);
    /// Native full-scale code, also the divisor of the scale transform.
    pub const FULL_SCALE: u16 = 0x0FFF;

    /// Wraps a code, returning `None` when it does not fit in 12 bits.
    pub const fn new(value: u16) -> Option<Self> {
        if value > Self::FULL_SCALE {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Builds a sample from its high nibble and low byte.
    ///
    /// Bits above the low nibble of `high` are discarded.
    pub const fn from_parts(high: u8, low: u8) -> Self {
        Self((((high & 0x0F) as u16) << 8) | low as u16)
    }

    /// Returns the raw code.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl From<RawSample> for u16 {
    fn from(value: RawSample) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::RawSample;

    #[test]
    fn new_rejects_codes_wider_than_twelve_bits() {
        assert_eq!(RawSample::new(4095), Some(RawSample::MAX));
        assert_eq!(RawSample::new(4096), None);
        assert_eq!(RawSample::new(0), Some(RawSample::ZERO));
    }

    #[test]
    fn from_parts_masks_high_nibble() {
        assert_eq!(RawSample::from_parts(0x0A, 0x3C).value(), 2620);
        assert_eq!(RawSample::from_parts(0xFA, 0x3C).value(), 2620);
        assert_eq!(RawSample::from_parts(0xFF, 0xFF), RawSample::MAX);
    }
}
