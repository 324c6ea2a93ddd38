use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

pub(crate) mod bit_fields;
mod channel;
mod constants;
mod details;
mod fifo;
mod payload_length;
mod pipe;
mod radio;
mod status;
pub use bit_fields::{ObserveTx, StatusFlags};
pub use constants::{commands, mnemonics, registers};

/// A collection of error types to describe hardware malfunctions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadioError<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents an error driving a digital output line (CE or CSN).
    Pin(DO),
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// One instance owns one physical chip: the SPI bus, the CE and CSN lines,
/// and a delay capability are moved in at construction. The API is not
/// reentrant; concurrent calls must be serialized by the caller.
pub struct Nrf24l01<SPI, DO, DELAY> {
    _spi: SPI,
    _ce_pin: DO,
    _csn_pin: DO,
    _delay_impl: DELAY,
    _buf: [u8; 33],
    _status: StatusFlags,
    _payload_size: u8,
}

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate an [`Nrf24l01`] object for use on the specified `spi` bus
    /// with the given `ce_pin` and `csn_pin`.
    ///
    /// No bus traffic occurs until [`begin()`](fn@crate::radio::prelude::EsbRadio::begin)
    /// is called.
    pub fn new(ce_pin: DO, csn_pin: DO, spi: SPI, delay_impl: DELAY) -> Nrf24l01<SPI, DO, DELAY> {
        Nrf24l01 {
            _spi: spi,
            _ce_pin: ce_pin,
            _csn_pin: csn_pin,
            _delay_impl: delay_impl,
            _buf: [0; 33],
            _status: StatusFlags::new(),
            _payload_size: 32,
        }
    }

    /// One atomic framed transaction: assert CSN, exchange `len` bytes from
    /// the frame buffer, deassert CSN. The CSN line is released even when
    /// the exchange fails. The chip's status byte (shifted out first) is
    /// cached for decoding.
    fn spi_transfer(&mut self, len: u8) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self._csn_pin.set_low().map_err(RadioError::Pin)?;
        let result = self
            ._spi
            .transfer_in_place(&mut self._buf[..len as usize])
            .map_err(RadioError::Spi);
        self._csn_pin.set_high().map_err(RadioError::Pin)?;
        result?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// Frame a `command` byte and clock `len` zeroed filler bytes to receive
    /// the chip's response into the frame buffer.
    ///
    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now cached in self._status
    /// ```
    fn spi_read(&mut self, len: u8, command: u8) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        for i in 0..len as usize {
            self._buf[i + 1] = 0;
        }
        self.spi_transfer(len + 1)
    }

    /// Read `len` bytes of the register at `reg` into the frame buffer.
    ///
    /// Addresses outside the chip's register space alias silently after
    /// masking, matching hardware behavior.
    fn read_register(&mut self, reg: u8, len: u8) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_read(len, commands::R_REGISTER | (commands::REGISTER_MASK & reg))
    }

    fn spi_write_byte(
        &mut self,
        reg: u8,
        byte: u8,
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self._buf[0] = commands::W_REGISTER | (commands::REGISTER_MASK & reg);
        self._buf[1] = byte;
        self.spi_transfer(2)
    }

    fn spi_write_buf(
        &mut self,
        reg: u8,
        buf: &[u8],
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self._buf[0] = commands::W_REGISTER | (commands::REGISTER_MASK & reg);
        let buf_len = buf.len();
        self._buf[1..buf_len + 1].copy_from_slice(buf);
        self.spi_transfer(buf_len as u8 + 1)
    }

    /// Set the number of retry attempts and delay between retry attempts
    /// used by the chip's auto-retransmit feature.
    ///
    /// Both parameters are clamped to the range [0, 15].
    /// - `delay`: how long to wait between each retry, in multiples of
    ///   250 us. The minimum value of 0 means 250 us, the maximum of 15
    ///   means 4000 us.
    /// - `count`: how many retries before giving up; 0 disables
    ///   retransmission.
    pub fn set_auto_retries(
        &mut self,
        delay: u8,
        count: u8,
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        let out = count.min(15) | (delay.min(15) << 4);
        self.spi_write_byte(registers::SETUP_RETR, out)
    }

    /// Power the chip down, leaving only CRC configured.
    ///
    /// The radio can neither receive nor transmit until a mode-entering call
    /// ([`start_listening()`](fn@crate::radio::prelude::EsbRadio::start_listening)
    /// or [`write()`](fn@crate::radio::prelude::EsbRadio::write)) powers it
    /// back up.
    pub fn power_down(&mut self) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self.spi_write_byte(registers::CONFIG, mnemonics::EN_CRC)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers};
    use crate::spi_test_expects;
    use crate::test::{csn_cycles, mk_radio, MockRadio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn set_auto_retries_clamps() {
        let spi_expectations = spi_test_expects![
            // both fields saturate at 15
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0xFFu8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0x23u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let MockRadio(mut radio, mut spi, mut ce, mut csn) =
            mk_radio(&[], &csn_cycles(2), &spi_expectations);
        radio.set_auto_retries(20, 250).unwrap();
        radio.set_auto_retries(2, 3).unwrap();
        spi.done();
        ce.done();
        csn.done();
    }

    #[test]
    pub fn power_down() {
        let spi_expectations = spi_test_expects![
            // CONFIG keeps EN_CRC only
            (
                vec![registers::CONFIG | commands::W_REGISTER, 8u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let MockRadio(mut radio, mut spi, mut ce, mut csn) =
            mk_radio(&[], &csn_cycles(1), &spi_expectations);
        radio.power_down().unwrap();
        spi.done();
        ce.done();
        csn.done();
    }

    #[test]
    pub fn status_is_cached_from_every_transaction() {
        let spi_expectations = spi_test_expects![
            // a plain NOP poll carries the status byte back
            (vec![commands::NOP], vec![0x4Eu8]),
        ];
        let MockRadio(mut radio, mut spi, mut ce, mut csn) =
            mk_radio(&[], &csn_cycles(1), &spi_expectations);
        radio.spi_read(0, commands::NOP).unwrap();
        assert!(radio._status.rx_dr());
        assert_eq!(radio._status.rx_pipe(), 7);
        spi.done();
        ce.done();
        csn.done();
    }
}
