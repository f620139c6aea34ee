// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the delays required by the OPC handshake.
///
/// Every wait in the driver (inter-byte gap, poll interval, settle delay)
/// goes through this trait so a test timer can account for time without sleeping.
pub trait OpcTimer {
    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Abstraction for the half-duplex, byte-at-a-time command bus (SPI or a USB-SPI bridge).
pub trait OpcTransport {
    /// Associated error type for bus/adapter errors.
    type Error: Debug;

    /// Clocks one byte out and returns the byte clocked in during the same exchange.
    ///
    /// Timing between calls is controlled by the driver, implementations should not add delays.
    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error>;
}

impl<T: OpcTransport + ?Sized> OpcTransport for &mut T {
    type Error = T::Error;

    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error> {
        (**self).transfer(byte)
    }
}

impl<D: OpcTimer + ?Sized> OpcTimer for &mut D {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

/// Wraps an `embedded_hal::spi::SpiDevice` so every byte is its own
/// chip-select framed transaction.
///
/// Requires `embedded-hal` v1.0 traits.
#[cfg(feature = "impl-native")]
#[derive(Debug)]
pub struct SpiTransport<D> {
    device: D,
}

#[cfg(feature = "impl-native")]
impl<D> SpiTransport<D> {
    pub fn new(device: D) -> Self {
        SpiTransport { device }
    }

    pub fn release(self) -> D {
        self.device
    }
}

#[cfg(feature = "impl-native")]
impl<D: embedded_hal::spi::SpiDevice> OpcTransport for SpiTransport<D> {
    type Error = D::Error;

    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error> {
        let mut word = [byte];
        self.device.transfer_in_place(&mut word)?;
        Ok(word[0])
    }
}

/// Wraps an `embedded_hal::delay::DelayNs` provider.
#[cfg(feature = "impl-native")]
#[derive(Debug)]
pub struct HalTimer<D>(pub D);

#[cfg(feature = "impl-native")]
impl<D: embedded_hal::delay::DelayNs> OpcTimer for HalTimer<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms)
    }
}

#[cfg(all(test, feature = "impl-native"))]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::spi::{ErrorType, Operation, SpiDevice};

    // Echoes the inverted byte back, one transfer per transaction.
    struct InvertingSpi {
        transactions: usize,
    }

    impl ErrorType for InvertingSpi {
        type Error = Infallible;
    }

    impl SpiDevice for InvertingSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Infallible> {
            self.transactions += 1;
            for op in operations.iter_mut() {
                if let Operation::TransferInPlace(words) = op {
                    for w in words.iter_mut() {
                        *w = !*w;
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_spi_transport_single_byte_transaction() {
        let mut transport = SpiTransport::new(InvertingSpi { transactions: 0 });
        assert_eq!(transport.transfer(0x0C), Ok(0xF3));
        assert_eq!(transport.transfer(0xCE), Ok(0x31));
        assert_eq!(transport.release().transactions, 2);
    }
}
