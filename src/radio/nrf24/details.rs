use core::fmt::Write;

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::bit_fields::FifoStatus;
use super::{commands, registers, ObserveTx};
use crate::radio::{prelude::EsbDetails, Nrf24l01, RadioError};

impl<SPI, DO, DELAY> EsbDetails for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DetailsErrorType = RadioError<SPI::Error, DO::Error>;

    /// Bus errors are propagated; formatting errors from `sink` are ignored
    /// since a truncated dump is still useful.
    fn print_details<W: Write>(&mut self, sink: &mut W) -> Result<(), Self::DetailsErrorType> {
        self.spi_read(0, commands::NOP)?;
        let status = self._status;
        let _ = writeln!(
            sink,
            "STATUS=0x{:02X} RX_DR={} TX_DS={} MAX_RT={} RX_P_NO={} TX_FULL={}",
            status.into_bits(),
            status.rx_dr() as u8,
            status.tx_ds() as u8,
            status.tx_df() as u8,
            status.rx_pipe(),
            status.tx_full() as u8,
        );

        // addresses are stored LSB first; dump them MSB first
        for (name, reg) in [
            ("RX_ADDR_P0", registers::RX_ADDR_P0),
            ("RX_ADDR_P1", registers::RX_ADDR_P0 + 1),
            ("TX_ADDR", registers::TX_ADDR),
        ] {
            self.read_register(reg, 5)?;
            let _ = write!(sink, "{}=0x", name);
            for byte in self._buf[1..6].iter().rev() {
                let _ = write!(sink, "{:02X}", byte);
            }
            let _ = writeln!(sink);
        }

        for (name, reg) in [
            ("EN_AA", registers::EN_AA),
            ("EN_RXADDR", registers::EN_RXADDR),
            ("RF_CH", registers::RF_CH),
        ] {
            self.read_register(reg, 1)?;
            let _ = writeln!(sink, "{}=0x{:02X}", name, self._buf[1]);
        }

        self.read_register(registers::FIFO_STATUS, 1)?;
        let fifo = FifoStatus::from_bits(self._buf[1]);
        let _ = writeln!(
            sink,
            "FIFO_STATUS: TX_REUSE={} TX_FULL={} TX_EMPTY={} RX_FULL={} RX_EMPTY={}",
            fifo.tx_reuse() as u8,
            fifo.tx_full() as u8,
            fifo.tx_empty() as u8,
            fifo.rx_full() as u8,
            fifo.rx_empty() as u8,
        );

        self.read_register(registers::OBSERVE_TX, 1)?;
        let observer = ObserveTx::from_bits(self._buf[1]);
        let _ = writeln!(
            sink,
            "OBSERVE_TX: PLOS_CNT={} ARC_CNT={}",
            observer.plos_cnt(),
            observer.arc_cnt(),
        );
        Ok(())
    }
}
