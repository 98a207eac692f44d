//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::SpiDevice;

use super::AdcInterface;
use crate::protocol::Frame;

/// SPI-based interface implementation for the ADC click driver.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> AdcInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn exchange(&mut self, tx: Frame) -> core::result::Result<Frame, Self::Error> {
        let mut frame = tx;
        // A single transfer keeps chip-select asserted, and any bus lock held, for exactly
        // one frame.
        self.spi.transfer_in_place(&mut frame)?;
        Ok(frame)
    }
}
