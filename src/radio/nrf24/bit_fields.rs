use bitfield_struct::bitfield;

/// The decoded view of the chip's STATUS byte, shifted out first in every
/// SPI transaction.
#[bitfield(u8, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// The sticky "RX Data Ready" event.
    pub rx_dr: bool,

    /// The sticky "TX Data Sent" event.
    pub tx_ds: bool,

    /// The sticky "TX Data Failed" event (auto-retransmit counter exhausted).
    pub tx_df: bool,

    /// The pipe number that received the payload at the front of the RX FIFO.
    ///
    /// Values 0..=5 name a pipe, 6 is unused, and 7 means the RX FIFO is empty.
    #[bits(3)]
    pub rx_pipe: u8,

    /// Is the TX FIFO full?
    pub tx_full: bool,
}

/// The decoded view of the OBSERVE_TX register: the chip's packet-loss and
/// auto-retry counters. Diagnostic only.
#[bitfield(u8, order = Msb)]
pub struct ObserveTx {
    /// Count of packets lost since the channel was last set. Caps at 15.
    #[bits(4)]
    pub plos_cnt: u8,

    /// Count of retransmissions for the current/last payload.
    #[bits(4)]
    pub arc_cnt: u8,
}

/// The decoded view of the FIFO_STATUS register.
#[bitfield(u8, order = Msb)]
pub(crate) struct FifoStatus {
    #[bits(1)]
    _padding: u8,

    /// Is the payload at the front of the TX FIFO flagged for reuse?
    pub tx_reuse: bool,

    pub tx_full: bool,
    pub tx_empty: bool,

    #[bits(2)]
    _reserved: u8,

    pub rx_full: bool,
    pub rx_empty: bool,
}
