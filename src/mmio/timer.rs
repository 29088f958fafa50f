//! Timer/counter control register addresses and bit positions for the ATmega328P.
//!
//! Addresses are data-memory addresses (I/O address + 0x20 for the low I/O range).

pub(crate) const TCCR0A: *mut u8 = 0x44 as *mut u8;
pub(crate) const TCCR0B: *mut u8 = 0x45 as *mut u8;
pub(crate) const TCCR1A: *mut u8 = 0x80 as *mut u8;
pub(crate) const TCCR1B: *mut u8 = 0x81 as *mut u8;
pub(crate) const TCCR2A: *mut u8 = 0xb0 as *mut u8;
pub(crate) const TCCR2B: *mut u8 = 0xb1 as *mut u8;

/// Bit layout shared by every TCCRnA register.
pub(crate) mod control_a {
    pub(crate) const WGM0: u8 = 1 << 0;
    pub(crate) const WGM1: u8 = 1 << 1;
    pub(crate) const COMB0: u8 = 1 << 4;
    pub(crate) const COMB1: u8 = 1 << 5;
    pub(crate) const COMA0: u8 = 1 << 6;
    pub(crate) const COMA1: u8 = 1 << 7;
}

/// Bit layout shared by every TCCRnB register.
pub(crate) mod control_b {
    pub(crate) const WGM2: u8 = 1 << 3;
    /// Only present on the 16-bit timer.
    pub(crate) const WGM3: u8 = 1 << 4;
}
