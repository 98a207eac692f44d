//! Command and response frame layout of the converter's 3-byte SPI conversion.
//!
//! A conversion is one full-duplex exchange of [`FRAME_LEN`] bytes:
//!
//! | byte | MOSI                                   | MISO                         |
//! |------|----------------------------------------|------------------------------|
//! | 0    | `0b0000_0 START SGL D2` ([`StartByte`]) | don't care                   |
//! | 1    | `D1 D0 xx_xxxx` ([`ChannelByte`])       | `xxx0 B11..B8` ([`ResultHigh`]) |
//! | 2    | `0x00`                                 | `B7..B0`                     |
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{Channel, InputMode};
use crate::sample::RawSample;

/// Length of one command/response frame in bytes.
pub const FRAME_LEN: usize = 3;

/// One command or response frame.
pub type Frame = [u8; FRAME_LEN];

/// Encoded first command byte for a single-ended conversion (start bit plus `SGL`).
pub const START_OPCODE: u8 = 0x06;

/// Bitfield representation of command byte 0.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartByte {
    // Channel select bit D2 (bit 0). Always clear on 4-channel parts.
    pub d2: bool,
    // Single-ended or differential input (bit 1).
    pub input_mode: InputMode,
    // Start bit (bit 2).
    pub start: bool,
    #[skip]
    __: B5,
}

impl From<u8> for StartByte {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<StartByte> for u8 {
    fn from(value: StartByte) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of command byte 1.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelByte {
    #[skip]
    __: B6,
    // Channel select bits D1:D0 (bits 7:6).
    pub channel: Channel,
}

impl From<u8> for ChannelByte {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<ChannelByte> for u8 {
    fn from(value: ChannelByte) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of response byte 1.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultHigh {
    // Result bits B11:B8 (bits 3:0).
    pub msb: B4,
    #[skip]
    __: B4,
}

impl From<u8> for ResultHigh {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

/// Builds the command frame requesting a single-ended conversion of `channel`.
pub fn command_frame(channel: Channel) -> Frame {
    let start = StartByte::new()
        .with_start(true)
        .with_input_mode(InputMode::SingleEnded)
        .with_d2(false);
    let select = ChannelByte::new().with_channel(channel);

    [u8::from(start), u8::from(select), 0x00]
}

/// Extracts the 12-bit result from a response frame.
pub fn decode_response(response: &Frame) -> RawSample {
    let high = ResultHigh::from(response[1]);
    RawSample::from_parts(high.msb(), response[2])
}
