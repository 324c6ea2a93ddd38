//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod nrf24;
pub use nrf24::{commands, mnemonics, registers, Nrf24l01, ObserveTx, RadioError, StatusFlags};
