/// A private module encapsulating register offsets for the nRF24L01.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    /// Pipes 1-5 are addressed as `RX_ADDR_P0 + pipe`.
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const TX_ADDR: u8 = 0x10;
    /// Pipes 1-5 are addressed as `RX_PW_P0 + pipe`.
    pub const RX_PW_P0: u8 = 0x11;
    pub const FIFO_STATUS: u8 = 0x17;
}

/// A private module encapsulating SPI commands for the nRF24L01.
pub mod commands {
    /// Register addresses occupy the low 5 bits of a read/write command byte.
    pub const REGISTER_MASK: u8 = 0x1F;
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
}

/// A private module to encapsulate bit mnemonics.
pub mod mnemonics {
    // STATUS register (sticky event bits are cleared by writing them back)
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;

    // CONFIG register
    pub const EN_CRC: u8 = 1 << 3;
    pub const PWR_UP: u8 = 1 << 1;
    pub const PRIM_RX: u8 = 1;
}
