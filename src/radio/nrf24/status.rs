use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{commands, mnemonics, registers, ObserveTx, StatusFlags};
use crate::radio::{prelude::EsbStatus, Nrf24l01, RadioError};

impl<SPI, DO, DELAY> EsbStatus for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = RadioError<SPI::Error, DO::Error>;

    fn get_status(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.spi_read(0, commands::NOP)?;
        Ok(self._status)
    }

    fn clear_status_flags(
        &mut self,
        rx_dr: bool,
        tx_ds: bool,
        tx_df: bool,
    ) -> Result<(), Self::StatusErrorType> {
        let mut flags = 0;
        if rx_dr {
            flags |= mnemonics::MASK_RX_DR;
        }
        if tx_ds {
            flags |= mnemonics::MASK_TX_DS;
        }
        if tx_df {
            flags |= mnemonics::MASK_MAX_RT;
        }
        self.spi_write_byte(registers::STATUS, flags)
    }

    fn get_observe_tx(&mut self) -> Result<ObserveTx, Self::StatusErrorType> {
        self.read_register(registers::OBSERVE_TX, 1)?;
        Ok(ObserveTx::from_bits(self._buf[1]))
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, mnemonics, registers, StatusFlags};
    use crate::radio::prelude::EsbStatus;
    use crate::spi_test_expects;
    use crate::test::{csn_cycles, mk_radio, MockRadio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn status_byte_decodes_per_register_map() {
        // TX_DS (bit 5), MAX_RT (bit 4), RX_P_NO = 0b111 (bits 3:1)
        let flags = StatusFlags::from_bits(0b0011_1110);
        assert!(!flags.rx_dr());
        assert!(flags.tx_ds());
        assert!(flags.tx_df());
        assert_eq!(flags.rx_pipe(), 7);
        assert!(!flags.tx_full());

        // TX_FULL (bit 0) and a valid pipe number
        let flags = StatusFlags::from_bits(0b0100_0101);
        assert!(flags.rx_dr());
        assert!(!flags.tx_ds());
        assert!(!flags.tx_df());
        assert_eq!(flags.rx_pipe(), 2);
        assert!(flags.tx_full());
    }

    #[test]
    pub fn get_status_polls_with_nop() {
        let spi_expectations = spi_test_expects![
            (vec![commands::NOP], vec![0x2Eu8]),
        ];
        let MockRadio(mut radio, mut spi, mut ce, mut csn) =
            mk_radio(&[], &csn_cycles(1), &spi_expectations);
        let flags = radio.get_status().unwrap();
        assert!(flags.tx_ds());
        assert_eq!(flags.rx_pipe(), 7);
        spi.done();
        ce.done();
        csn.done();
    }

    #[test]
    pub fn clear_status_flags_writes_back_selected_bits() {
        let spi_expectations = spi_test_expects![
            (
                vec![
                    registers::STATUS | commands::W_REGISTER,
                    mnemonics::MASK_RX_DR,
                ],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x70u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let MockRadio(mut radio, mut spi, mut ce, mut csn) =
            mk_radio(&[], &csn_cycles(2), &spi_expectations);
        radio.clear_status_flags(true, false, false).unwrap();
        radio.clear_status_flags(true, true, true).unwrap();
        spi.done();
        ce.done();
        csn.done();
    }

    #[test]
    pub fn get_observe_tx() {
        let spi_expectations = spi_test_expects![
            (vec![registers::OBSERVE_TX, 0u8], vec![0xEu8, 0xA3u8]),
        ];
        let MockRadio(mut radio, mut spi, mut ce, mut csn) =
            mk_radio(&[], &csn_cycles(1), &spi_expectations);
        let observer = radio.get_observe_tx().unwrap();
        assert_eq!(observer.plos_cnt(), 10u8);
        assert_eq!(observer.arc_cnt(), 3u8);
        spi.done();
        ce.done();
        csn.done();
    }
}
