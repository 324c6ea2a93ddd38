use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::registers;
use crate::radio::{prelude::EsbPipe, Nrf24l01, RadioError};

impl<SPI, DO, DELAY> EsbPipe for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PipeErrorType = RadioError<SPI::Error, DO::Error>;

    fn open_writing_pipe(&mut self, address: u64) -> Result<(), Self::PipeErrorType> {
        // The chip expects addresses LSB first.
        let addr = address.to_le_bytes();
        self.spi_write_buf(registers::RX_ADDR_P0, &addr[..5])?;
        self.spi_write_buf(registers::TX_ADDR, &addr[..5])
    }

    fn open_reading_pipe(&mut self, pipe: u8, address: u64) -> Result<(), Self::PipeErrorType> {
        if pipe < 1 || pipe > 5 {
            return Ok(());
        }
        let addr = address.to_le_bytes();
        self.spi_write_buf(registers::RX_ADDR_P0 + pipe, &addr[..5])?;
        self.spi_write_byte(registers::RX_PW_P0 + pipe, self._payload_size)?;

        // The auto-ack enable bits for all pipes share one register, so this
        // is the one place a read-then-write-back sequence is required.
        self.read_register(registers::EN_AA, 1)?;
        let en_aa = self._buf[1] | (1 << pipe);
        self.spi_write_byte(registers::EN_AA, en_aa)
    }
}
