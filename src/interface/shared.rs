//! Sharing one SPI bus between several drivers.
//!
//! The bus lives in a single [`SharedBus`] mutex. Each peripheral gets its own
//! [`SharedSpiDevice`] bound to its chip-select line; the mutex is taken for one
//! `SpiDevice` transaction and released before the next, so other drivers can use the bus
//! between two channel reads.
//!
//! ```rust,ignore
//! static BUS: SharedBus<Spi> = ...;
//!
//! let adc = AdcClick::new_spi(shared_device(&BUS, adc_cs)?, Config::default());
//! let other = OtherDriver::new(shared_device(&BUS, other_cs)?);
//! ```

use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::digital::OutputPin;
use embedded_hal_bus::spi::{CriticalSectionDevice, NoDelay};

/// Process-wide lock around an SPI bus.
pub type SharedBus<BUS> = Mutex<RefCell<BUS>>;

/// SPI device that locks a [`SharedBus`] for the duration of each transaction.
pub type SharedSpiDevice<'a, BUS, CS> = CriticalSectionDevice<'a, BUS, CS, NoDelay>;

/// Wraps a bus so several devices can reference it.
pub const fn shared_bus<BUS>(bus: BUS) -> SharedBus<BUS> {
    Mutex::new(RefCell::new(bus))
}

/// Creates a device on `bus` selected by `cs`. The chip-select line is driven high (idle) first.
pub fn shared_device<'a, BUS, CS>(
    bus: &'a SharedBus<BUS>,
    cs: CS,
) -> core::result::Result<SharedSpiDevice<'a, BUS, CS>, CS::Error>
where
    CS: OutputPin,
{
    CriticalSectionDevice::new_no_delay(bus, cs)
}
