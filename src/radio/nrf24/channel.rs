use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::registers;
use crate::radio::{prelude::EsbChannel, Nrf24l01, RadioError};

impl<SPI, DO, DELAY> EsbChannel for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ChannelErrorType = RadioError<SPI::Error, DO::Error>;

    /// The specified `channel` is clamped to the range [0, 127].
    /// Takes effect immediately for subsequent transmissions.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self.spi_write_byte(registers::RF_CH, channel.min(127))
    }

    /// See also [`Nrf24l01::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        self.read_register(registers::RF_CH, 1)?;
        Ok(self._buf[1])
    }
}
