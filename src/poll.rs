//! Periodic polling wrapper around the driver.
//!
//! A [`PolledSensor`] tracks a single quantity and is driven by an external
//! scheduler calling [`PolledSensor::update`] at its chosen interval. Bus and
//! checksum failures never reach the caller; they only age out the cached
//! reading. A disconnected sensor keeps showing its last good value for up to
//! [`FAULT_LIMIT`] minus one cycles, then reads as unknown until a
//! measurement succeeds again.

use crate::types::*;

use core::fmt;

use embedded_hal::{delay::DelayNs, i2c::I2c};

#[cfg(feature = "defmt")]
use defmt::{error, warn};
#[cfg(feature = "log")]
use log::{error, warn};
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! error {
    ($($arg:tt)*) => {};
}

/// Consecutive failures after which the cached reading is invalidated.
pub const FAULT_LIMIT: u8 = 10;

/// Pause after a failed poll, to avoid hammering a wedged bus.
const FAILURE_BACKOFF_MS: u32 = 100;

/// One polled quantity of one physical sensor.
///
/// Holds the driver, the quantity it tracks, the last good reading and a
/// consecutive-failure counter. One poller per instance; access from
/// multiple callers needs external synchronization, as does sharing the
/// underlying bus between instances.
#[derive(Debug)]
pub struct PolledSensor<I2C, Delay> {
    driver: Htu21d<I2C, Delay>,
    kind: MeasurementKind,
    name: &'static str,
    reading: Option<f32>,
    failures: u8,
}

impl<I2C, Delay, E> PolledSensor<I2C, Delay>
where
    I2C: I2c<Error = E>,
    Delay: DelayNs,
{
    /// Wrap a driver instance for periodic polling of one quantity.
    pub fn new(driver: Htu21d<I2C, Delay>, kind: MeasurementKind, name: &'static str) -> Self {
        Self {
            driver,
            kind,
            name,
            reading: None,
            failures: 0,
        }
    }

    /// Run one poll cycle: soft reset, trigger, read, decode.
    ///
    /// Never fails from the caller's perspective. Blocks for the reset and
    /// conversion delays (on the order of 155 ms), plus a short backoff when
    /// the measurement failed.
    pub fn update(&mut self) {
        // Best effort; a failed reset does not abort the measurement attempt.
        if self.driver.soft_reset().is_err() {
            warn!("htu21d: soft reset failed for {}", self.name);
        }

        match self.driver.measure(self.kind) {
            Ok(value) => {
                self.reading = Some(round_tenths(value));
                self.failures = 0;
            }
            Err(_) => {
                self.failures += 1;
                if self.failures >= FAULT_LIMIT {
                    error!(
                        "htu21d: {} consecutive failures, {} reading is now unknown",
                        self.failures, self.name
                    );
                    self.reading = None;
                    self.failures = 0;
                } else {
                    warn!(
                        "htu21d: measurement failed for {} ({} consecutive)",
                        self.name, self.failures
                    );
                    self.driver.delay.delay_ms(FAILURE_BACKOFF_MS);
                }
            }
        }
    }

    /// Last good reading, rounded to one decimal place, or `None` when no
    /// measurement has succeeded yet or the sensor has been failing for
    /// [`FAULT_LIMIT`] consecutive polls.
    pub fn value(&self) -> Option<f32> {
        self.reading
    }

    /// Unit symbol of the reading.
    pub fn unit(&self) -> &'static str {
        self.kind.unit()
    }

    /// Quantity this instance tracks.
    pub fn kind(&self) -> MeasurementKind {
        self.kind
    }

    /// Configured base name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current consecutive-failure count.
    pub fn consecutive_failures(&self) -> u8 {
        self.failures
    }

    /// Tear down the poller and hand the driver back.
    pub fn into_driver(self) -> Htu21d<I2C, Delay> {
        self.driver
    }
}

impl<I2C, Delay> fmt::Display for PolledSensor<I2C, Delay> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.kind)
    }
}

/// Round to one decimal place, halves away from zero.
fn round_tenths(value: f32) -> f32 {
    let scaled = value * 10.0;
    let nearest = if scaled < 0.0 {
        (scaled - 0.5) as i32
    } else {
        (scaled + 0.5) as i32
    };
    nearest as f32 / 10.0
}
