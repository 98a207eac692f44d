//! Error handling primitives for the ADC click driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The underlying bus exchange failed. The transport error is passed through untouched.
    Transport(E),
    /// The channel index is outside `0..=3`.
    InvalidChannel,
    /// The requested scale range is inverted, empty, or wider than the native 12-bit span.
    InvalidScaleRange,
    /// The provided configuration parameters are invalid.
    InvalidConfig,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Transport(err)
    }
}
