use crate::hw_def::*;

use core::fmt;

#[cfg(feature = "defmt")]
use defmt::Format;

/// HTU21D(F) device driver
#[derive(Debug)]
pub struct Htu21d<I2C, Delay> {
    pub(crate) i2c: I2C,
    pub(crate) delay: Delay,
    pub(crate) i2c_addr: I2cAddr,
}

/// All possible errors in this crate
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Debug)]
pub enum Error<E> {
    /// I²C communication error
    I2c(E),
    /// Failure of a checksum from the device was detected
    #[cfg(feature = "crc")]
    CrcMismatch,
}

/// Physical quantity tracked by one driver instance
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasurementKind {
    /// Temperature in degrees Centigrade
    Temperature,
    /// Relative humidity in percent
    Humidity,
}

impl MeasurementKind {
    /// Human-readable label for the quantity
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
        }
    }

    /// Unit symbol of the converted value
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity => "%",
        }
    }

    pub(crate) const fn trigger_command(self) -> Command {
        match self {
            Self::Temperature => Command::TriggerTempNoHold,
            Self::Humidity => Command::TriggerRelHumidNoHold,
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One 3-byte measurement frame as read from the device: two data bytes
/// followed by the device-computed checksum
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawMeasurement {
    /// most significant data byte
    pub msb: u8,
    /// least significant data byte; its low two bits are status flags
    pub lsb: u8,
    /// checksum byte over the two data bytes
    pub checksum: u8,
}

impl RawMeasurement {
    /// Get the 16-bit measurement word with the status bits masked off
    pub const fn counts(&self) -> u16 {
        combine_bytes(self.msb, self.lsb)
    }

    /// Get temperature in Centigrade
    pub fn centigrade(&self) -> f32 {
        raw_temp_to_centigrade(self.counts())
    }

    /// Get relative humidity in percent
    pub fn rel_humid_percent(&self) -> f32 {
        raw_rel_humid_to_percent(self.counts())
    }

    /// Convert according to the quantity the frame was measured as
    pub fn value(&self, kind: MeasurementKind) -> f32 {
        match kind {
            MeasurementKind::Temperature => self.centigrade(),
            MeasurementKind::Humidity => self.rel_humid_percent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use float_cmp::approx_eq;

    #[test]
    fn raw_measurement_conversion_tracks_kind() {
        let raw = RawMeasurement { msb: 0x4E, lsb: 0x85, checksum: 0x6B };
        assert_eq!(raw.counts(), 0x4E84);
        assert!(approx_eq!(
            f32,
            raw.value(MeasurementKind::Temperature),
            raw.centigrade(),
            epsilon = 1e-6
        ));
        assert!(approx_eq!(
            f32,
            raw.value(MeasurementKind::Humidity),
            raw.rel_humid_percent(),
            epsilon = 1e-6
        ));
    }

    #[test]
    fn kind_metadata() {
        assert_eq!(MeasurementKind::Temperature.unit(), "°C");
        assert_eq!(MeasurementKind::Humidity.unit(), "%");
        assert_eq!(MeasurementKind::Temperature.label(), "Temperature");
        assert_eq!(MeasurementKind::Humidity.label(), "Humidity");
    }
}
