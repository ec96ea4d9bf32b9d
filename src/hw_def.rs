//! Constants and transfer functions from the HTU21D datasheet.

#[cfg(feature = "defmt")]
use defmt::Format;

/// Default 7-bit I2C address of the HTU21D.
pub const DEFAULT_I2C_ADDR: u8 = 0x40;

/// Reinitialization time after a soft reset, worst case.
pub const RESET_DELAY_MS: u32 = 100;

/// Conversion time in no-hold-master mode at maximum resolution, worst case.
/// No-hold-master releases the bus during conversion, so the driver waits a
/// fixed interval instead of being clock-stretched by the device.
pub const MEASURE_DELAY_MS: u32 = 55;

/// Mask clearing the two status bits in the LSB of a measurement word.
pub const STATUS_BITS_MASK: u16 = 0xFFFC;

/// 7-bit I2C device address.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cAddr(u8);

impl I2cAddr {
    /// Wrap a 7-bit device address.
    pub const fn new(addr: u8) -> Self {
        Self(addr)
    }

    /// Get the address as the raw byte passed to the bus.
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl Default for I2cAddr {
    fn default() -> Self {
        Self(DEFAULT_I2C_ADDR)
    }
}

/// Command bytes accepted by the device.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Trigger a temperature measurement, no-hold-master mode.
    TriggerTempNoHold = 0xF3,
    /// Trigger a relative humidity measurement, no-hold-master mode.
    TriggerRelHumidNoHold = 0xF5,
    /// Write the user register.
    WriteUserRegister = 0xE6,
    /// Read the user register.
    ReadUserRegister = 0xE7,
    /// Soft reset (reboot without removing power).
    SoftReset = 0xFE,
}

impl Command {
    /// Get the command as the single byte written on the bus.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Measurement resolution, selected by bits 7 and 0 of the user register.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Resolution {
    /// 12-bit relative humidity, 14-bit temperature (power-on default).
    RelHumid12Temp14 = 0x00,
    /// 8-bit relative humidity, 12-bit temperature.
    RelHumid8Temp12 = 0x01,
    /// 10-bit relative humidity, 13-bit temperature.
    RelHumid10Temp13 = 0x80,
    /// 11-bit relative humidity, 11-bit temperature.
    RelHumid11Temp11 = 0x81,
}

impl Resolution {
    /// Mask covering the two resolution bits in the user register.
    pub const USER_REGISTER_MASK: u8 = 0x81;

    /// Get the resolution as its user register bit pattern.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Combine the two data bytes of a measurement into a 16-bit word, masking
/// off the two status bits in the LSB.
pub const fn combine_bytes(msb: u8, lsb: u8) -> u16 {
    (((msb as u16) << 8) | lsb as u16) & STATUS_BITS_MASK
}

/// Convert a raw temperature word to degrees Centigrade.
///
/// Datasheet: Temp = -46.85 + 175.72 * (S_Temp / 2^16)
pub fn raw_temp_to_centigrade(raw: u16) -> f32 {
    175.72 * (raw as f32 / 65536.0) - 46.85
}

/// Convert a raw relative humidity word to percent.
///
/// Datasheet: RH = -6 + 125 * (S_RH / 2^16)
pub fn raw_rel_humid_to_percent(raw: u16) -> f32 {
    125.0 * (raw as f32 / 65536.0) - 6.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use float_cmp::approx_eq;

    #[test]
    fn combine_bytes_masks_status_bits() {
        for msb in 0..=255u8 {
            for lsb in 0..=255u8 {
                let combined = combine_bytes(msb, lsb);
                assert_eq!(combined & 0x0003, 0);
                assert_eq!(combined >> 8, msb as u16);
            }
        }
    }

    #[test]
    fn temperature_scale_endpoints() {
        assert!(approx_eq!(f32, raw_temp_to_centigrade(0), -46.85, epsilon = 1e-4));
        // Full scale after status-bit masking.
        assert!(approx_eq!(
            f32,
            raw_temp_to_centigrade(0xFFFC),
            128.859268,
            epsilon = 1e-3
        ));
    }

    #[test]
    fn humidity_scale_endpoints() {
        assert!(approx_eq!(f32, raw_rel_humid_to_percent(0), -6.0, epsilon = 1e-4));
        assert!(approx_eq!(
            f32,
            raw_rel_humid_to_percent(0xFFFC),
            118.992371,
            epsilon = 1e-3
        ));
    }

    /// Datasheet p. 15 worked example: 0x683A is 24.7 degC.
    #[test]
    fn temperature_datasheet_example() {
        let counts = combine_bytes(0x68, 0x3A);
        assert!(approx_eq!(f32, raw_temp_to_centigrade(counts), 24.686, epsilon = 1e-3));
    }

    /// Datasheet p. 15 worked example: 0x7C80 is 54.8 %RH.
    #[test]
    fn humidity_datasheet_example() {
        let counts = combine_bytes(0x7C, 0x80);
        assert!(approx_eq!(f32, raw_rel_humid_to_percent(counts), 54.791, epsilon = 1e-3));
    }

    #[test]
    fn resolution_bits_stay_inside_mask() {
        for res in [
            Resolution::RelHumid12Temp14,
            Resolution::RelHumid8Temp12,
            Resolution::RelHumid10Temp13,
            Resolution::RelHumid11Temp11,
        ] {
            assert_eq!(res.bits() & !Resolution::USER_REGISTER_MASK, 0);
        }
    }
}
