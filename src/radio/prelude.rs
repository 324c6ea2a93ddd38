//! This module defines the generic traits that may
//! need to be imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24l01::radio::prelude::*;
//! ```

use crate::{FifoState, ObserveTx, StatusFlags};

/// A trait to represent the rudimentary modes (TX and RX)
/// of an ESB capable transceiver.
pub trait EsbRadio {
    type RadioErrorType;

    /// Initialize the radio's hardware.
    ///
    /// This deactivates the CE pin, deasserts the CSN line, configures the
    /// most generous auto-retransmit settings the chip supports (favoring
    /// reliability during bring-up over latency), clears the sticky status
    /// events, flushes both FIFOs, and applies the default channel (1) and
    /// payload size (8).
    ///
    /// Calling this again is allowed but re-applies the defaults.
    fn begin(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Put the radio into active RX mode.
    ///
    /// This powers the radio up with CRC enabled, clears the sticky status
    /// events, flushes the RX FIFO, activates the CE pin, then blocks for
    /// the chip's analog settling time before returning.
    ///
    /// <div class="warning">
    ///
    /// Calling this while already listening re-applies the configuration and
    /// flushes the RX FIFO, discarding any buffered payloads.
    ///
    /// </div>
    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Take the radio out of active RX mode.
    ///
    /// This only deactivates the CE pin; it does not power the radio down.
    /// Listening is not automatically resumed after [`EsbRadio::write()`];
    /// that is the caller's responsibility.
    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Blocking function to transmit a given payload.
    ///
    /// Exactly the configured payload size is clocked out of `buf`
    /// (zero-padded if `buf` is shorter). This busy-polls the chip until it
    /// reports the payload as sent or the auto-retransmit counter as
    /// exhausted, then deactivates the CE pin, powers down, clears the
    /// sticky status events, and flushes the TX FIFO.
    ///
    /// Returns `true` if an acknowledgement was received, `false` if the
    /// retries were exhausted.
    ///
    /// <div class="warning">
    ///
    /// If the chip never reports either outcome (unpowered, miswired), this
    /// call never returns. Use [`EsbRadio::write_with_limit()`] or the
    /// [`EsbRadio::start_write()`]/[`EsbRadio::poll_write()`] pair when an
    /// unbounded wait is unacceptable.
    ///
    /// </div>
    fn write(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType>;

    /// Non-blocking half of [`EsbRadio::write()`]: power up in TX mode,
    /// load one payload into the TX FIFO, and activate the CE pin.
    ///
    /// Follow up with [`EsbRadio::poll_write()`] until it reports an outcome.
    fn start_write(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Poll a transmission started with [`EsbRadio::start_write()`] once.
    ///
    /// Returns [`None`] while the chip reports neither "data sent" nor
    /// "max retransmits". Once either event is observed, this performs the
    /// same teardown as [`EsbRadio::write()`] and returns `Some(true)` for a
    /// successful transmission or `Some(false)` for retry exhaustion.
    fn poll_write(&mut self) -> Result<Option<bool>, Self::RadioErrorType>;

    /// Bounded variant of [`EsbRadio::write()`].
    ///
    /// Polls at most `max_polls` times. If no outcome was observed within
    /// that many polls, the transmission is abandoned (with the usual
    /// teardown) and [`None`] is returned.
    fn write_with_limit(
        &mut self,
        buf: &[u8],
        max_polls: u32,
    ) -> Result<Option<bool>, Self::RadioErrorType>;

    /// Is there a payload ready to [`EsbRadio::read()`]?
    ///
    /// This polls the chip's status byte. If the "RX data ready" event is
    /// set, the sticky bit is cleared (written back) and `true` is returned.
    /// The event is consumed by this call: a subsequent call returns `false`
    /// until the chip receives another payload, so callers should
    /// [`EsbRadio::read()`] promptly.
    fn available(&mut self) -> Result<bool, Self::RadioErrorType>;

    /// Fetch one payload from the RX FIFO into `buf`.
    ///
    /// Exactly the configured payload size is clocked in regardless of
    /// `buf.len()`; a shorter buffer receives the leading bytes and the
    /// remainder is discarded. Returns `true` if the RX FIFO is empty after
    /// the read, meaning this was the last buffered payload.
    ///
    /// This does not check whether data was actually available; reading an
    /// empty FIFO yields stale, repeated bytes rather than an error. Call
    /// [`EsbRadio::available()`] first.
    fn read(&mut self, buf: &mut [u8]) -> Result<bool, Self::RadioErrorType>;
}

/// A trait to represent manipulation of data pipes
/// for an ESB capable transceiver.
pub trait EsbPipe {
    type PipeErrorType;

    /// Open pipe 0 for transmitting to the 40-bit `address`.
    ///
    /// The address is written to both the TX address register and pipe 0's
    /// RX address register, because the chip's auto-ack mechanism expects
    /// the acknowledgement to arrive on pipe 0 with the TX address. The
    /// upper 24 bits of `address` are ignored.
    fn open_writing_pipe(&mut self, address: u64) -> Result<(), Self::PipeErrorType>;

    /// Open a specified `pipe` (1..=5) for receiving from the 40-bit
    /// `address`.
    ///
    /// This writes the pipe's address register, sets the pipe's payload size
    /// to the session's *current* payload size, and enables auto-ack for the
    /// pipe via a read-modify-write of the shared enable register. Configure
    /// the payload size before opening reading pipes if they must share a
    /// new size.
    ///
    /// Pipe 0 is reserved for [`EsbPipe::open_writing_pipe()`]; a `pipe`
    /// outside 1..=5 is silently ignored, matching the chip's behavior for
    /// out-of-range register indices.
    fn open_reading_pipe(&mut self, pipe: u8, address: u64) -> Result<(), Self::PipeErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for an ESB capable transceiver.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from
    /// 2400 MHz. The specified `channel` is clamped to the range [0, 127].
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of the static payload size
/// for an ESB capable transceiver.
pub trait EsbPayloadLength {
    type PayloadLengthErrorType;

    /// Set the session's payload size in bytes.
    ///
    /// The value is clamped to the chip's 32-byte maximum and written to
    /// pipe 0's payload size register. There is deliberately no lower
    /// clamp. Pipes opened via [`EsbPipe::open_reading_pipe()`] snapshot the
    /// value current at configuration time; changing it later does not
    /// retroactively resize already-opened pipes.
    fn set_payload_size(&mut self, size: u8) -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the session's payload size (cached, no bus traffic).
    fn get_payload_size(&self) -> u8;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Discard everything in the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Discard everything in the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the state of the specified FIFO.
    ///
    /// - Pass `true` to `about_tx` parameter to get the state of the TX FIFO.
    /// - Pass `false` to `about_tx` parameter to get the state of the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;
}

/// A trait to represent manipulation of the status byte
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Poll the chip's status byte with a no-op command and decode it.
    ///
    /// This is the cheapest possible status poll: a single-byte transaction
    /// not tied to any register write.
    fn get_status(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Clear the radio's sticky status events by writing them back.
    ///
    /// The supported events correspond to the parameters:
    /// - `rx_dr` means "RX Data Ready"
    /// - `tx_ds` means "TX Data Sent"
    /// - `tx_df` means "TX Data Failed" to send (max retransmits)
    ///
    /// Set a parameter to `true` to clear the corresponding event; `false`
    /// leaves it untouched. Sticky events that are observed but never
    /// cleared will misread as fresh on subsequent polls.
    fn clear_status_flags(
        &mut self,
        rx_dr: bool,
        tx_ds: bool,
        tx_df: bool,
    ) -> Result<(), Self::StatusErrorType>;

    /// Read the chip's transmission observer register.
    ///
    /// Exposes the packet-loss and auto-retry counters. Purely diagnostic;
    /// not required for control flow.
    fn get_observe_tx(&mut self) -> Result<ObserveTx, Self::StatusErrorType>;
}

/// A trait to represent debug output
/// for an ESB capable transceiver.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Dump the radio's current status and addressing configuration as
    /// human-readable lines into `sink`.
    ///
    /// This should only be used for debugging development.
    fn print_details<W: core::fmt::Write>(
        &mut self,
        sink: &mut W,
    ) -> Result<(), Self::DetailsErrorType>;
}
