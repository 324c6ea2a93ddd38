use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::bit_fields::FifoStatus;
use super::{commands, registers};
use crate::radio::{prelude::EsbFifo, Nrf24l01, RadioError};
use crate::FifoState;

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Load one payload into the TX FIFO. Exactly the session's payload size
    /// is clocked out; a shorter `buf` is zero-padded, a longer one is
    /// truncated. FIFO depth is never inspected here.
    pub(crate) fn write_payload(
        &mut self,
        buf: &[u8],
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self._buf[0] = commands::W_TX_PAYLOAD;
        let len = self._payload_size as usize;
        for i in 0..len {
            self._buf[i + 1] = if i < buf.len() { buf[i] } else { 0 };
        }
        self.spi_transfer(len as u8 + 1)
    }

    /// Fetch one payload from the RX FIFO into `buf`. The session's payload
    /// size is always clocked in full so the chip sees a complete
    /// `R_RX_PAYLOAD` frame; a shorter `buf` only receives the leading bytes
    /// and the rest are discarded.
    pub(crate) fn read_payload(
        &mut self,
        buf: &mut [u8],
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_read(self._payload_size, commands::R_RX_PAYLOAD)?;
        let len = buf.len().min(self._payload_size as usize);
        buf[..len].copy_from_slice(&self._buf[1..len + 1]);
        Ok(())
    }
}

impl<SPI, DO, DELAY> EsbFifo for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type FifoErrorType = RadioError<SPI::Error, DO::Error>;

    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_RX)
    }

    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_TX)
    }

    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        self.read_register(registers::FIFO_STATUS, 1)?;
        let fifo = FifoStatus::from_bits(self._buf[1]);
        let (empty, full) = if about_tx {
            (fifo.tx_empty(), fifo.tx_full())
        } else {
            (fifo.rx_empty(), fifo.rx_full())
        };
        if empty {
            Ok(FifoState::Empty)
        } else if full {
            Ok(FifoState::Full)
        } else {
            Ok(FifoState::Occupied)
        }
    }
}
