//! High-level ADC click driver implementation.

use embedded_hal::spi::SpiDevice;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::AdcInterface;
use crate::interface::spi::SpiInterface;
use crate::params::{CHANNEL_COUNT, Channel};
use crate::sample::RawSample;
use crate::sampler;
use crate::scale::ScaleRange;

/// High-level synchronous driver for the 4-channel ADC click.
///
/// Owns the last-value cache and the output scale. Every read is one bus transaction; reading
/// all channels is four independent transactions, so other users of a shared bus may
/// interleave between channels.
pub struct AdcClick<IFACE> {
    interface: IFACE,
    config: Config,
    last: [RawSample; CHANNEL_COUNT],
}

impl<IFACE> AdcClick<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    ///
    /// The cache starts at zero and the scale is taken from `config`.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self {
            interface,
            config,
            last: [RawSample::ZERO; CHANNEL_COUNT],
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    // ==================================================================
    // == Accessors ======================================================
    // ==================================================================
    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Active output scale.
    pub fn scale(&self) -> ScaleRange {
        self.config.scale
    }

    /// Copy of the whole cache, indexed by channel.
    pub fn last_values(&self) -> [RawSample; CHANNEL_COUNT] {
        self.last
    }
}

impl<SPI> AdcClick<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI, config: Config) -> Self {
        Self::new(SpiInterface::new(spi), config)
    }

    /// Releases the driver, returning the SPI device and configuration.
    pub fn release_spi(self) -> (SPI, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> AdcClick<IFACE>
where
    IFACE: AdcInterface<Error = CommE>,
{
    // ==================================================================
    // == Data Acquisition ===============================================
    // ==================================================================
    /// Converts `channel` and returns the raw 12-bit code.
    ///
    /// The cache entry for `channel` is only updated when the transaction succeeds.
    pub fn read_raw(&mut self, channel: u8) -> Result<u16, CommE> {
        let channel = Self::channel(channel)?;
        self.acquire(channel).map(RawSample::value)
    }

    /// Converts `channel` and returns the value mapped through the current scale.
    pub fn read_scaled(&mut self, channel: u8) -> Result<i32, CommE> {
        let channel = Self::channel(channel)?;
        let raw = self.acquire(channel)?;
        Ok(self.config.scale.apply(raw))
    }

    /// Converts every channel in ascending order and returns the raw codes.
    ///
    /// Each channel is a separate transaction, so the values are not a simultaneous snapshot.
    /// On failure the error of the first failing channel is returned; channels read before it
    /// keep their refreshed cache entries and the remaining ones are left untouched.
    pub fn read_all_raw(&mut self) -> Result<[u16; CHANNEL_COUNT], CommE> {
        let mut values = [0u16; CHANNEL_COUNT];
        for channel in Channel::ALL {
            values[channel.index()] = self.acquire(channel)?.value();
        }
        Ok(values)
    }

    /// Converts every channel in ascending order and returns the scaled values.
    ///
    /// Same ordering and partial-failure behavior as [`read_all_raw`](Self::read_all_raw).
    pub fn read_all_scaled(&mut self) -> Result<[i32; CHANNEL_COUNT], CommE> {
        let mut values = [0i32; CHANNEL_COUNT];
        for channel in Channel::ALL {
            let raw = self.acquire(channel)?;
            values[channel.index()] = self.config.scale.apply(raw);
        }
        Ok(values)
    }

    // ==================================================================
    // == Scale & Configuration ==========================================
    // ==================================================================
    /// Replaces the output scale for all channels.
    ///
    /// Fails with [`Error::InvalidScaleRange`] when `high <= low` or `high - low > 4095`, in
    /// which case the previous scale stays active. Cached raw samples are kept; scaled
    /// accessors use the new range from the next call on.
    pub fn configure_scale(&mut self, low: i32, high: i32) -> Result<(), CommE> {
        let scale = ScaleRange::new(low, high).map_err(|_| {
            warn!("rejected scale range {}..={}", low, high);
            Error::InvalidScaleRange
        })?;

        self.config.scale = scale;
        debug!("scale set to {}..={}", low, high);
        Ok(())
    }

    /// Applies a whole configuration after validating it.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        config.validate().map_err(|_| Error::InvalidConfig)?;
        self.config = config;
        Ok(())
    }

    // ==================================================================
    // == Cached Values ==================================================
    // ==================================================================
    /// Raw value of the most recent successful read of `channel`, without touching the bus.
    ///
    /// May be stale relative to the input signal. Zero until the channel is first read.
    pub fn last_raw(&self, channel: u8) -> Result<u16, CommE> {
        let channel = Self::channel(channel)?;
        Ok(self.last[channel.index()].value())
    }

    /// Cached value of `channel` mapped through the current scale, without touching the bus.
    pub fn last_scaled(&self, channel: u8) -> Result<i32, CommE> {
        let channel = Self::channel(channel)?;
        Ok(self.config.scale.apply(self.last[channel.index()]))
    }

    fn channel(channel: u8) -> Result<Channel, CommE> {
        Channel::try_from(channel).map_err(|_| Error::InvalidChannel)
    }

    fn acquire(&mut self, channel: Channel) -> Result<RawSample, CommE> {
        let raw = sampler::sample(&mut self.interface, channel).map_err(|err| {
            warn!("adc: ch{} transaction failed", channel.index() as u8);
            Error::Transport(err)
        })?;
        self.last[channel.index()] = raw;
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::AdcClick;
    use crate::config::Config;
    use crate::error::Error;
    use crate::interface::AdcInterface;
    use crate::protocol::Frame;
    use crate::sample::RawSample;
    use crate::scale::ScaleRange;
    use embedded_hal::spi::MODE_1;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BusFault;

    /// Replays one scripted reply per exchange and records every command frame.
    struct ScriptedBus {
        replies: Vec<core::result::Result<Frame, BusFault>>,
        sent: Vec<Frame>,
    }

    impl ScriptedBus {
        fn new(replies: &[core::result::Result<Frame, BusFault>]) -> Self {
            Self {
                replies: replies.iter().rev().copied().collect(),
                sent: Vec::new(),
            }
        }

        fn channels_sent(&self) -> Vec<u8> {
            self.sent.iter().map(|frame| frame[1] >> 6).collect()
        }
    }

    impl Drop for ScriptedBus {
        fn drop(&mut self) {
            if !std::thread::panicking() {
                assert!(self.replies.is_empty(), "not all scripted replies consumed");
            }
        }
    }

    impl AdcInterface for ScriptedBus {
        type Error = BusFault;

        fn exchange(&mut self, tx: Frame) -> core::result::Result<Frame, Self::Error> {
            self.sent.push(tx);
            self.replies.pop().expect("unexpected exchange")
        }
    }

    fn reply(value: u16) -> core::result::Result<Frame, BusFault> {
        Ok([0x00, (value >> 8) as u8 | 0xE0, value as u8])
    }

    fn driver(replies: &[core::result::Result<Frame, BusFault>]) -> AdcClick<ScriptedBus> {
        AdcClick::new(ScriptedBus::new(replies), Config::default())
    }

    #[test]
    fn read_raw_decodes_and_caches() {
        let mut adc = driver(&[Ok([0x00, 0x0A, 0x3C])]);

        assert_eq!(adc.read_raw(1), Ok(2620));
        assert_eq!(adc.last_raw(1), Ok(2620));
        assert_eq!(adc.last_raw(1), Ok(2620));
        assert_eq!(adc.interface_mut().sent.len(), 1);
        assert_eq!(adc.interface_mut().sent[0], [0x06, 0x40, 0x00]);
    }

    #[test]
    fn cache_starts_at_zero() {
        let adc = driver(&[]);
        assert_eq!(adc.last_values(), [RawSample::ZERO; 4]);
        assert_eq!(adc.last_scaled(3), Ok(0));
    }

    #[test]
    fn read_scaled_applies_active_scale() {
        let mut adc = driver(&[reply(4095), reply(2048)]);
        adc.configure_scale(0, 3300).unwrap();

        assert_eq!(adc.read_scaled(0), Ok(3300));
        assert_eq!(adc.read_scaled(0), Ok(1650));
        assert_eq!(adc.last_raw(0), Ok(2048));
    }

    #[test]
    fn invalid_channel_is_rejected_without_bus_traffic() {
        let mut adc = driver(&[]);

        assert_eq!(adc.read_raw(4), Err(Error::InvalidChannel));
        assert_eq!(adc.read_scaled(200), Err(Error::InvalidChannel));
        assert_eq!(adc.last_raw(4), Err(Error::InvalidChannel));
        assert_eq!(adc.last_scaled(4), Err(Error::InvalidChannel));
        assert!(adc.interface_mut().sent.is_empty());
    }

    #[test]
    fn read_all_visits_channels_in_ascending_order() {
        let mut adc = driver(&[reply(10), reply(20), reply(30), reply(4095)]);

        assert_eq!(adc.read_all_raw(), Ok([10, 20, 30, 4095]));
        assert_eq!(adc.interface_mut().channels_sent(), [0, 1, 2, 3]);
        assert_eq!(adc.last_raw(3), Ok(4095));
    }

    #[test]
    fn read_all_scaled_uses_one_scale_for_every_channel() {
        let mut adc = driver(&[reply(0), reply(4095), reply(2048), reply(1)]);
        adc.configure_scale(-100, 100).unwrap();

        assert_eq!(adc.read_all_scaled(), Ok([-100, 100, 0, -100]));
    }

    #[test]
    fn read_all_stops_at_first_failure() {
        let mut adc = driver(&[reply(1), reply(2), reply(3), reply(4)]);
        adc.read_all_raw().unwrap();

        adc.interface_mut().replies = [reply(111), reply(222), Err(BusFault)]
            .into_iter()
            .rev()
            .collect();

        assert_eq!(adc.read_all_raw(), Err(Error::Transport(BusFault)));
        assert_eq!(adc.interface_mut().channels_sent(), [0, 1, 2, 3, 0, 1, 2]);
        assert_eq!(adc.last_raw(0), Ok(111));
        assert_eq!(adc.last_raw(1), Ok(222));
        assert_eq!(adc.last_raw(2), Ok(3));
        assert_eq!(adc.last_raw(3), Ok(4));
    }

    #[test]
    fn failed_read_leaves_cache_untouched() {
        let mut adc = driver(&[reply(900), Err(BusFault)]);

        assert_eq!(adc.read_raw(2), Ok(900));
        assert_eq!(adc.read_scaled(2), Err(Error::Transport(BusFault)));
        assert_eq!(adc.last_raw(2), Ok(900));
    }

    #[test]
    fn rejected_scale_keeps_previous_range() {
        let mut adc = driver(&[]);
        adc.configure_scale(0, 3300).unwrap();

        assert_eq!(adc.configure_scale(10, 10), Err(Error::InvalidScaleRange));
        assert_eq!(adc.configure_scale(0, 4096), Err(Error::InvalidScaleRange));
        assert_eq!(adc.scale(), ScaleRange::new(0, 3300).unwrap());
    }

    #[test]
    fn configure_scale_is_idempotent_and_not_retroactive() {
        let mut adc = driver(&[reply(4095)]);
        assert_eq!(adc.read_raw(0), Ok(4095));
        assert_eq!(adc.last_scaled(0), Ok(4095));

        adc.configure_scale(0, 1000).unwrap();
        let first = adc.scale();
        adc.configure_scale(0, 1000).unwrap();

        assert_eq!(adc.scale(), first);
        assert_eq!(adc.last_raw(0), Ok(4095));
        assert_eq!(adc.last_scaled(0), Ok(1000));
    }

    #[test]
    fn configure_validates_whole_config() {
        let mut adc = driver(&[]);
        let scale = ScaleRange::new(0, 4000).unwrap();

        assert_eq!(
            adc.configure(Config::new().mode(MODE_1).build()),
            Err(Error::InvalidConfig)
        );
        assert_eq!(adc.config(), &Config::default());

        adc.configure(Config::new().scale(scale).build()).unwrap();
        assert_eq!(adc.scale(), scale);
    }

    #[test]
    fn release_returns_interface_and_config() {
        let adc = driver(&[]);
        let (bus, config) = adc.release();
        assert!(bus.sent.is_empty());
        assert_eq!(config, Config::default());
    }
}
