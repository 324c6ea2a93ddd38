#![no_std]
#![doc = include_str!("../README.md")]

mod enums;
pub use enums::FifoState;
pub mod radio;
#[doc(inline)]
pub use radio::{Nrf24l01, ObserveTx, RadioError, StatusFlags};

#[cfg(test)]
mod test {
    extern crate std;
    use crate::radio::Nrf24l01;
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };
    use std::vec::Vec;

    /// Takes an indefinite repetition of a tuple of 2 vectors:
    /// `(expected_data, response_data)` and generates an array of
    /// `SpiTransaction`s for the raw bus.
    ///
    /// NOTE: This macro is only used to generate code in unit tests (for this crate only).
    #[macro_export]
    macro_rules! spi_test_expects {
        ($( ($expected:expr , $response:expr $(,)? ) , ) + ) => {
            [
                $(
                    SpiTransaction::transfer_in_place($expected, $response),
                )*
            ]
        }
    }

    /// A tuple struct to encapsulate objects used to mock [`Nrf24l01`]:
    /// the radio itself, the SPI bus, the CE pin, and the CSN pin.
    pub struct MockRadio(
        pub Nrf24l01<SpiMock<u8>, PinMock, NoopDelay>,
        pub SpiMock<u8>,
        pub PinMock,
        pub PinMock,
    );

    /// The CSN pin is toggled LOW then HIGH for every framed SPI transaction.
    /// This builds the pin expectations for `count` transactions.
    pub fn csn_cycles(count: usize) -> Vec<PinTransaction> {
        let mut expectations = Vec::with_capacity(count * 2);
        for _ in 0..count {
            expectations.push(PinTransaction::set(PinState::Low));
            expectations.push(PinTransaction::set(PinState::High));
        }
        expectations
    }

    /// Create mock objects using the given expectations.
    pub fn mk_radio(
        ce_expectations: &[PinTransaction],
        csn_expectations: &[PinTransaction],
        spi_expectations: &[SpiTransaction<u8>],
    ) -> MockRadio {
        let spi = SpiMock::new(spi_expectations);
        let ce_pin = PinMock::new(ce_expectations);
        let csn_pin = PinMock::new(csn_expectations);
        let delay_impl = NoopDelay::new();
        let radio = Nrf24l01::new(ce_pin.clone(), csn_pin.clone(), spi.clone(), delay_impl);
        MockRadio(radio, spi, ce_pin, csn_pin)
    }
}
