//! Bus transport trait and the embedded-hal I2C implementation.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

/// Bus address shared by every extension controller.
pub const I2C_ADDR: SevenBitAddress = 0x52;

/// Time the controller needs between a pointer write and the read (µs).
pub const CONVERSION_DELAY_US: u32 = 175;

/// Register access used by the driver.
///
/// This abstracts the two-wire bus so the state machine can run against real
/// hardware or a scripted mock. Every call blocks until the transfer
/// completes or fails; there is no retry at this layer.
pub trait Transport {
    /// Error reported by the underlying bus.
    type Error;

    /// Write a single register.
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Set the register pointer, then burst-read `buf.len()` bytes from it.
    ///
    /// On error the contents of `buf` are unspecified.
    fn read_registers(&mut self, pointer: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Block for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// [`Transport`] over a blocking embedded-hal I2C bus.
///
/// Reads are split into a pointer write and a separate read with
/// [`CONVERSION_DELAY_US`] in between. Extension controllers do not
/// support repeated-start `write_read`.
pub struct I2cTransport<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C, D> I2cTransport<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    #[must_use]
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self { i2c, delay }
    }

    /// Give back the bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C, D> Transport for I2cTransport<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(I2C_ADDR, &[register, value])
    }

    fn read_registers(&mut self, pointer: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write(I2C_ADDR, &[pointer])?;
        self.delay.delay_us(CONVERSION_DELAY_US);
        self.i2c.read(I2C_ADDR, buf)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
