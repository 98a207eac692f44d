//! Configuration primitives for the ADC click driver.
//!
//! The bus values (`clock_hz`, `cs_line`, `mode`) are consumed by the board layer when it
//! opens the SPI device; the driver only validates and reports them.

use embedded_hal::spi::{MODE_0, MODE_3, Mode};

use crate::scale::ScaleRange;

/// Reference transaction clock rate.
pub const DEFAULT_CLOCK_HZ: u32 = 1_000_000;
/// Highest clock rate the converter is specified for.
pub const MAX_CLOCK_HZ: u32 = 2_000_000;

/// User-facing configuration for the ADC click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// SPI clock rate in hertz.
    pub clock_hz: u32,
    /// Chip-select line identifier on the host socket.
    pub cs_line: u8,
    /// SPI clock polarity/phase.
    pub mode: Mode,
    /// Initial output scale applied to every channel.
    pub scale: ScaleRange,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration is usable with the converter.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.clock_hz == 0 || self.clock_hz > MAX_CLOCK_HZ {
            return Err(ConfigError::ClockOutOfRange);
        }

        // The converter samples on rising edges and idles with either clock polarity.
        if self.mode != MODE_0 && self.mode != MODE_3 {
            return Err(ConfigError::UnsupportedMode);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the SPI clock rate.
    pub fn clock_hz(mut self, clock_hz: u32) -> Self {
        self.config.clock_hz = clock_hz;
        self
    }

    /// Sets the chip-select line identifier.
    pub fn cs_line(mut self, cs_line: u8) -> Self {
        self.config.cs_line = cs_line;
        self
    }

    /// Overrides the SPI mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Sets the initial output scale.
    pub fn scale(mut self, scale: ScaleRange) -> Self {
        self.config.scale = scale;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock_hz: DEFAULT_CLOCK_HZ,
            cs_line: 0,
            mode: MODE_0,
            scale: ScaleRange::NATIVE,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Clock rate is zero or above [`MAX_CLOCK_HZ`].
    ClockOutOfRange,
    /// SPI mode other than mode 0 or mode 3.
    UnsupportedMode,
}
