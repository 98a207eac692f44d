//! Affine remapping of raw 12-bit codes into an application-defined range.
//!
//! The transform is `((high - low) * raw) / 4095 + low` with truncating integer division.
//! Results are reproducible across platforms and never rounded up, so `raw = 4095` maps to
//! exactly `high` while intermediate codes may land one unit below the ideal value.

use crate::sample::RawSample;

/// Output domain the raw codes are remapped into.
///
/// The span `high - low` is strictly positive and never exceeds the native 4095 codes: the
/// transform can only compress the converter's resolution, never stretch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleRange {
    low: i32,
    high: i32,
}

/// Reasons a scale range is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScaleError {
    /// `high` is not strictly greater than `low`.
    Inverted,
    /// `high - low` exceeds the converter's native span.
    TooWide,
}

impl ScaleRange {
    /// Identity mapping over the converter's native `0..=4095` codes.
    pub const NATIVE: Self = Self {
        low: 0,
        high: RawSample::FULL_SCALE as i32,
    };

    /// Validates and builds a scale range.
    pub const fn new(low: i32, high: i32) -> core::result::Result<Self, ScaleError> {
        if high <= low {
            return Err(ScaleError::Inverted);
        }
        if (high as i64) - (low as i64) > RawSample::FULL_SCALE as i64 {
            return Err(ScaleError::TooWide);
        }
        Ok(Self { low, high })
    }

    /// Lower bound, produced for `raw = 0`.
    pub const fn low(&self) -> i32 {
        self.low
    }

    /// Upper bound, produced for `raw = 4095`.
    pub const fn high(&self) -> i32 {
        self.high
    }

    /// Width of the output domain.
    pub const fn span(&self) -> i32 {
        self.high - self.low
    }

    /// Maps a raw code into this range.
    pub const fn apply(&self, raw: RawSample) -> i32 {
        // span <= 4095 and raw <= 4095, so the product stays well inside i32.
        self.span() * raw.value() as i32 / RawSample::FULL_SCALE as i32 + self.low
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self::NATIVE
    }
}
