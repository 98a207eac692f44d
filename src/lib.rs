#![cfg_attr(not(test), no_std)]
//! `#![no_std]` driver for 4-channel, 12-bit SPI ADC click boards (MCP3204 class).
//!
//! ```rust
//! # use embedded_hal_mock::eh1::spi::{Mock, Transaction};
//! use adc_click::{AdcClick, config::Config};
//!
//! # let expectations = [
//! #     Transaction::transaction_start(),
//! #     Transaction::transfer_in_place(vec![0x06, 0x00, 0x00], vec![0x00, 0x0A, 0x3C]),
//! #     Transaction::transaction_end(),
//! # ];
//! # let mut spi = Mock::new(&expectations);
//! let mut adc = AdcClick::new_spi(spi.clone(), Config::default());
//! adc.configure_scale(0, 3300).unwrap();
//!
//! let millivolts = adc.read_scaled(0).unwrap();
//! assert_eq!(millivolts, 2111);
//! assert_eq!(adc.last_raw(0).unwrap(), 2620);
//! # spi.done();
//! ```

#[macro_use]
mod log;

mod error;

pub mod config;
pub mod device;
pub mod event;
pub mod interface;
pub mod params;
pub mod protocol;
pub mod sample;
pub mod sampler;
pub mod scale;

pub use crate::device::AdcClick;
pub use crate::error::{Error, Result};
