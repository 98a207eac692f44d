//! Bus interface abstraction for the ADC click driver.

pub mod shared;
pub mod spi;

use crate::protocol::Frame;

/// Abstraction over the full-duplex frame exchange required by the driver.
///
/// One call is one bus transaction. Implementations must hold any shared-bus lock for the
/// duration of that single exchange and release it before returning.
pub trait AdcInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Clocks `tx` out while clocking the same number of bytes in, returning what was received.
    fn exchange(&mut self, tx: Frame) -> core::result::Result<Frame, Self::Error>;
}
