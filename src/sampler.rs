//! Single-channel conversion over the bus interface.

use crate::interface::AdcInterface;
use crate::params::Channel;
use crate::protocol::{command_frame, decode_response};
use crate::sample::RawSample;

/// Runs one conversion of `channel` and decodes the result.
///
/// Issues exactly one [`AdcInterface::exchange`]. Transport errors are returned as-is.
pub fn sample<IFACE>(interface: &mut IFACE, channel: Channel) -> core::result::Result<RawSample, IFACE::Error>
where
    IFACE: AdcInterface,
{
    let tx = command_frame(channel);
    let rx = interface.exchange(tx)?;
    let raw = decode_response(&rx);
    trace!("adc: ch{} -> {}", channel.index() as u8, raw.value());
    Ok(raw)
}
