//! Strongly typed parameter enumerations for the ADC click driver.
//!
//! These enums map directly to the converter's command-frame encodings and are used by
//! [`protocol`](crate::protocol) and the high-level driver APIs.
//!
//! # Examples
//!
//! ```rust
//! use adc_click::params::Channel;
//!
//! let channel = Channel::try_from(2u8).unwrap();
//! assert_eq!(channel, Channel::Ch2);
//! assert_eq!(channel.index(), 2);
//! assert!(Channel::try_from(4u8).is_err());
//! ```

use modular_bitfield::prelude::Specifier;

/// Number of analog inputs on the converter.
pub const CHANNEL_COUNT: usize = 4;

/// Analog input selection, encoded in the `D1:D0` bits of the command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Channel {
    /// Input `CH0`.
    Ch0 = 0b00,
    /// Input `CH1`.
    Ch1 = 0b01,
    /// Input `CH2`.
    Ch2 = 0b10,
    /// Input `CH3`.
    Ch3 = 0b11,
}

impl Channel {
    /// All channels in ascending acquisition order.
    pub const ALL: [Channel; CHANNEL_COUNT] = [Self::Ch0, Self::Ch1, Self::Ch2, Self::Ch3];

    /// Returns the zero-based channel index.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Rejected channel index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidChannel(pub u8);

impl TryFrom<u8> for Channel {
    type Error = InvalidChannel;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Ch0),
            1 => Ok(Self::Ch1),
            2 => Ok(Self::Ch2),
            3 => Ok(Self::Ch3),
            other => Err(InvalidChannel(other)),
        }
    }
}

impl From<Channel> for u8 {
    fn from(value: Channel) -> Self {
        value as u8
    }
}

/// Input configuration bit (`SGL/DIFF`) of the command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum InputMode {
    /// Pseudo-differential pair conversion.
    Differential = 0,
    /// Single-ended conversion against `VSS`.
    SingleEnded = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_indices_follow_declaration_order() {
        for (expected, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), expected);
            assert_eq!(Channel::try_from(expected as u8), Ok(*channel));
        }
    }

    #[test]
    fn out_of_range_channel_is_rejected() {
        assert_eq!(Channel::try_from(4u8), Err(InvalidChannel(4)));
        assert_eq!(Channel::try_from(u8::MAX), Err(InvalidChannel(u8::MAX)));
    }
}
