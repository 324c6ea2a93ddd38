use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::bit_fields::FifoStatus;
use super::{mnemonics, registers};
use crate::radio::{
    prelude::{EsbChannel, EsbFifo, EsbPayloadLength, EsbRadio, EsbStatus},
    Nrf24l01, RadioError,
};

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Common teardown after a transmission attempt resolves (or is
    /// abandoned): deactivate CE, power down, clear the sticky events, and
    /// drop anything still queued in the TX FIFO.
    fn end_write(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self._ce_pin.set_low().map_err(RadioError::Pin)?;
        self.power_down()?;
        self.clear_status_flags(true, true, true)?;
        self.flush_tx()
    }
}

impl<SPI, DO, DELAY> EsbRadio for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = RadioError<SPI::Error, DO::Error>;

    fn begin(&mut self) -> Result<(), Self::RadioErrorType> {
        self._ce_pin.set_low().map_err(RadioError::Pin)?;
        self._csn_pin.set_high().map_err(RadioError::Pin)?;

        // most forgiving retry settings until the app tightens them
        self.set_auto_retries(15, 15)?;
        self.clear_status_flags(true, true, true)?;
        self.flush_rx()?;
        self.flush_tx()?;
        self.set_channel(1)?;
        self.set_payload_size(8)
    }

    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        self.spi_write_byte(
            registers::CONFIG,
            mnemonics::EN_CRC | mnemonics::PWR_UP | mnemonics::PRIM_RX,
        )?;
        self.clear_status_flags(true, true, true)?;
        self.flush_rx()?;
        self._ce_pin.set_high().map_err(RadioError::Pin)?;
        // analog settling time after power-up
        self._delay_impl.delay_ms(1);
        Ok(())
    }

    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        self._ce_pin.set_low().map_err(RadioError::Pin)
    }

    fn write(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType> {
        self.start_write(buf)?;
        loop {
            if let Some(sent) = self.poll_write()? {
                return Ok(sent);
            }
        }
    }

    fn start_write(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        self.spi_write_byte(registers::CONFIG, mnemonics::EN_CRC | mnemonics::PWR_UP)?;
        self.write_payload(buf)?;
        self._ce_pin.set_high().map_err(RadioError::Pin)
    }

    fn poll_write(&mut self) -> Result<Option<bool>, Self::RadioErrorType> {
        // any transaction refreshes the cached status byte; reading the
        // observer register keeps the retry counters visible while waiting
        self.read_register(registers::OBSERVE_TX, 1)?;
        if !self._status.tx_ds() && !self._status.tx_df() {
            return Ok(None);
        }
        let sent = self._status.tx_ds();
        self.end_write()?;
        Ok(Some(sent))
    }

    fn write_with_limit(
        &mut self,
        buf: &[u8],
        max_polls: u32,
    ) -> Result<Option<bool>, Self::RadioErrorType> {
        self.start_write(buf)?;
        for _ in 0..max_polls {
            if let Some(sent) = self.poll_write()? {
                return Ok(Some(sent));
            }
        }
        self.end_write()?;
        Ok(None)
    }

    fn available(&mut self) -> Result<bool, Self::RadioErrorType> {
        self.get_status()?;
        if self._status.rx_dr() {
            // consume the sticky event so the next payload re-arms it
            self.clear_status_flags(true, false, false)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<bool, Self::RadioErrorType> {
        self.read_payload(buf)?;
        self.read_register(registers::FIFO_STATUS, 1)?;
        Ok(FifoStatus::from_bits(self._buf[1]).rx_empty())
    }
}
