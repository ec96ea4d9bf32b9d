//! This is a platform-agnostic Rust driver for the HTU21D(F) digital humidity
//! and temperature sensor by TE Connectivity (also sold on GY-21 breakout
//! boards), using the blocking [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal
//!
//! This driver allows you to:
//! - Trigger and read temperature and relative humidity measurements in
//!   no-hold-master mode, so the bus stays free during the conversion.
//! - Validate every measurement frame against the device checksum.
//! - Convert raw counts to degrees Centigrade and percent relative humidity.
//! - Trigger a soft reset.
//! - Read the user register and select the measurement resolution.
//! - Poll a sensor periodically through [`PolledSensor`], which keeps the
//!   last good reading across transient failures and invalidates it after
//!   [`FAULT_LIMIT`] consecutive bad polls.
//!
//! This driver does not yet support the following device features:
//! - Hold-master measurement mode (bus-level clock stretching during
//!   conversion).
//! - The on-chip heater and the end-of-battery status bit.
//! - Dew point computation from the ambient temperature and humidity pair.
//!
//! ## Features
//!
//! - `crc`: Checks received checksums against computed checksums (default).
//! - `defmt`: Enables logging using the `defmt` framework.
//! - `log`: Enables logging using the `log` framework.
//!
//! ## Supported devices: HTU21D, HTU21D-F
//!
//! The HTU21D is a capacitive relative humidity sensor with an integrated
//! temperature sensor in a 3 mm x 3 mm DFN package. It answers on fixed I2C
//! address 0x40 and delivers 16-bit measurement frames protected by an 8-bit
//! CRC. Resolution is configurable between 8 and 12 bits for humidity and 11
//! and 14 bits for temperature through the user register.
//!
//! Datasheet:
//!   [HTU21D](https://cdn-shop.adafruit.com/datasheets/1899_HTU21D.pdf)
//!
//! To use this driver, import this crate and an `embedded_hal`
//! implementation, then instantiate the device.
//!
//! ## One-shot example:
//!
//! ```ignore
//! use htu21d::{Htu21d, I2cAddr, MeasurementKind};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal::i2c::I2c instance, e.g. /dev/i2c-1 */;
//! let delay = /* embedded_hal::delay::DelayNs instance */;
//!
//! let mut htu21d = Htu21d::new(i2c, delay, I2cAddr::default());
//! htu21d.soft_reset().unwrap();
//!
//! let centigrade = htu21d.measure(MeasurementKind::Temperature).unwrap();
//! let percent = htu21d.measure(MeasurementKind::Humidity).unwrap();
//! println!("{:0.1} °C, {:0.1} %RH", centigrade, percent);
//! ```
//!
//! ## Polling example:
//!
//! ```ignore
//! use htu21d::{Htu21d, I2cAddr, MeasurementKind, PolledSensor};
//!
//! let htu21d = Htu21d::new(i2c, delay, I2cAddr::default());
//! let mut sensor = PolledSensor::new(htu21d, MeasurementKind::Humidity, "Greenhouse");
//!
//! loop {
//!     // Swallowed failures age out the cached value after ten bad polls.
//!     sensor.update();
//!     match sensor.value() {
//!         Some(value) => println!("{sensor}: {value} {}", sensor.unit()),
//!         None => println!("{sensor}: unknown"),
//!     }
//!
//!     // Platform-specific: sleep until the next poll
//!     sleep_secs(60);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

mod device_impl;
mod hw_def;
mod poll;
mod types;

pub use crate::{hw_def::*, poll::*, types::*};
