use crate::hw_def::*;
use crate::types::*;

use embedded_hal::{delay::DelayNs, i2c::I2c};

#[cfg(feature = "defmt")]
use defmt::{trace, warn};
#[cfg(feature = "log")]
use log::{trace, warn};
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

cfg_if::cfg_if! {
    if #[cfg(feature = "crc")] {
        // CRC-8 from the datasheet: polynomial x^8 + x^5 + x^4 + 1 (0x31),
        // init 0x00, MSB first, no reflection, no final xor.
        const CRC_8_HTU21D: crc::Algorithm<u8> = crc::Algorithm {
            width: 8,
            poly: 0x31,
            init: 0x00,
            refin: false,
            refout: false,
            xorout: 0x00,
            check: 0xA2,
            residue: 0x00,
        };
        const CRC: crc::Crc<u8> = crc::Crc::<u8>::new(&CRC_8_HTU21D);
    }
}

impl<I2C, Delay, E> Htu21d<I2C, Delay>
where
    I2C: I2c<Error = E>,
    Delay: DelayNs,
{
    /// Create a new HTU21D driver instance
    pub fn new(i2c: I2C, delay: Delay, i2c_addr: I2cAddr) -> Self {
        Self { i2c, delay, i2c_addr }
    }

    /// Release the bus and delay provider back to the caller
    pub fn release(self) -> (I2C, Delay) {
        (self.i2c, self.delay)
    }

    fn write_command(&mut self, command: Command) -> Result<(), Error<E>> {
        self.i2c
            .write(self.i2c_addr.as_u8(), &[command.as_u8()])
            .map_err(Error::I2c)
    }

    /// Soft reset: reboot the device without removing power, then wait for
    /// it to reinitialize. The user register reverts to its power-on value.
    pub fn soft_reset(&mut self) -> Result<(), Error<E>> {
        self.write_command(Command::SoftReset)?;
        self.delay.delay_ms(RESET_DELAY_MS);
        Ok(())
    }

    /// Trigger a measurement in no-hold-master mode, wait out the worst-case
    /// conversion time and read back the raw 3-byte frame.
    ///
    /// The trigger and the result read are separate bus transactions, so the
    /// bus is free for other devices during the conversion delay.
    pub fn measure_raw(&mut self, kind: MeasurementKind) -> Result<RawMeasurement, Error<E>> {
        self.write_command(kind.trigger_command())?;
        self.delay.delay_ms(MEASURE_DELAY_MS);

        let mut frame = [0u8; 3];
        self.i2c
            .read(self.i2c_addr.as_u8(), &mut frame)
            .map_err(Error::I2c)?;
        trace!(
            "htu21d::measure_raw(): frame=[{}, {}, {}]",
            frame[0],
            frame[1],
            frame[2]
        );

        let raw = RawMeasurement {
            msb: frame[0],
            lsb: frame[1],
            checksum: frame[2],
        };
        #[cfg(feature = "crc")]
        {
            let crc_expect = CRC.checksum(&[raw.msb, raw.lsb]);
            if raw.checksum != crc_expect {
                warn!(
                    "htu21d::measure_raw(): crc mismatch: read={}, computed={}",
                    raw.checksum, crc_expect
                );
                return Err(Error::CrcMismatch);
            }
        }
        Ok(raw)
    }

    /// Trigger a measurement and convert it to physical units: degrees
    /// Centigrade for [`MeasurementKind::Temperature`], percent relative
    /// humidity for [`MeasurementKind::Humidity`].
    pub fn measure(&mut self, kind: MeasurementKind) -> Result<f32, Error<E>> {
        let raw = self.measure_raw(kind)?;
        Ok(raw.value(kind))
    }

    /// Read the user register
    pub fn read_user_register(&mut self) -> Result<u8, Error<E>> {
        let mut reg = [0u8; 1];
        self.i2c
            .write_read(self.i2c_addr.as_u8(), &[Command::ReadUserRegister.as_u8()], &mut reg)
            .map_err(Error::I2c)?;
        Ok(reg[0])
    }

    /// Select the measurement resolution. Reads the user register and
    /// rewrites only the two resolution bits; the reserved bits hold
    /// calibration data and must be preserved.
    pub fn set_resolution(&mut self, resolution: Resolution) -> Result<(), Error<E>> {
        let reg = self.read_user_register()?;
        let reg = (reg & !Resolution::USER_REGISTER_MASK) | resolution.bits();
        self.i2c
            .write(self.i2c_addr.as_u8(), &[Command::WriteUserRegister.as_u8(), reg])
            .map_err(Error::I2c)
    }
}
