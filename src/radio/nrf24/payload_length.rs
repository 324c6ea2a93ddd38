use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::registers;
use crate::radio::{prelude::EsbPayloadLength, Nrf24l01, RadioError};

impl<SPI, DO, DELAY> EsbPayloadLength for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PayloadLengthErrorType = RadioError<SPI::Error, DO::Error>;

    /// The given `size` is clamped to the chip's 32-byte maximum. There is
    /// no lower clamp; a size of 0 is cached as-is.
    fn set_payload_size(&mut self, size: u8) -> Result<(), Self::PayloadLengthErrorType> {
        let len = size.min(32);
        self._payload_size = len;
        self.spi_write_byte(registers::RX_PW_P0, len)
    }

    fn get_payload_size(&self) -> u8 {
        self._payload_size
    }
}
