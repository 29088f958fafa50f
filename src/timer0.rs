//! Timer/counter 0, an 8-bit timer.
//!
//! The external clock input T0 is PD4 (Arduino D4). Compare output A drives PD6 (D6) and compare
//! output B drives PD5 (D5).

use crate::{
    mmio::{
        Mmio,
        timer::{
            TCCR0A, TCCR0B,
            control_a::{COMA0, COMA1, COMB0, COMB1, WGM0, WGM1},
            control_b::WGM2,
        },
    },
    timer::{Error, Fragments, Peripheral, Timer},
};
use core::{
    fmt::{self, Display, Formatter},
    ops::BitOr,
};
use deranged::RangedU8;

/// Waveform-generation bits for each mode, as (TCCR0A, TCCR0B).
pub const MODES: [Fragments; 8] = [
    Fragments::new(0, 0),
    Fragments::new(WGM0, 0),
    Fragments::new(WGM1, 0),
    Fragments::new(WGM0 | WGM1, 0),
    Fragments::new(0, WGM2),
    Fragments::new(WGM0, WGM2),
    Fragments::new(WGM1, WGM2),
    Fragments::new(WGM0 | WGM1, WGM2),
];

/// Marker for timer/counter 0.
#[derive(Debug)]
pub struct Timer0;

impl Peripheral for Timer0 {
    const NAME: &'static str = "timer0";
    const MODES: &'static [Fragments] = &MODES;

    type Mode = Mode;
    type Clock = Clock;
    type Port = Port;
}

impl Timer<Timer0> {
    /// Creates a handle to the hardware TCCR0A and TCCR0B registers.
    ///
    /// # Safety
    /// Must be running on an ATmega328P, and no other handle to timer 0 may be in use.
    pub const unsafe fn steal() -> Self {
        unsafe { Self::new(Mmio::new(TCCR0A), Mmio::new(TCCR0B)) }
    }
}

/// A waveform-generation mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mode(RangedU8<0, 7>);

impl Mode {
    /// Normal, top = 0xFF.
    pub const NORMAL: Self = Self(RangedU8::new_static::<0>());
    /// PWM, phase correct, top = 0xFF.
    pub const PWM_PHASE_CORRECT: Self = Self(RangedU8::new_static::<1>());
    /// CTC, top = OCR0A.
    pub const CTC: Self = Self(RangedU8::new_static::<2>());
    /// Fast PWM, top = 0xFF.
    pub const FAST_PWM: Self = Self(RangedU8::new_static::<3>());
    /// PWM, phase correct, top = OCR0A.
    pub const PWM_PHASE_CORRECT_OCR0A: Self = Self(RangedU8::new_static::<5>());
    /// Fast PWM, top = OCR0A.
    pub const FAST_PWM_OCR0A: Self = Self(RangedU8::new_static::<7>());

    /// Creates a mode from a ranged mode number. Reserved rows are accepted.
    pub const fn new(value: RangedU8<0, 7>) -> Self {
        Self(value)
    }

    /// Whether the datasheet reserves this mode.
    pub fn is_reserved(self) -> bool {
        matches!(self.0.get(), 4 | 6)
    }
}

impl Display for Mode {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(match self.0.get() {
            0 => "normal, top = 0xFF",
            1 => "PWM, phase correct, top = 0xFF",
            2 => "CTC, top = OCR0A",
            3 => "fast PWM, top = 0xFF",
            5 => "PWM, phase correct, top = OCR0A",
            7 => "fast PWM, top = OCR0A",
            _ => "reserved",
        })
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        RangedU8::new(mode).map(Self).ok_or(Error::ModeOutOfRange {
            timer: Timer0::NAME,
            mode,
            modes: MODES.len(),
        })
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> Self {
        mode.0.get()
    }
}

/// Clock source, written to the CS02:0 bits of TCCR0B.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Clock(u8);

impl Clock {
    /// No clock source; the timer is stopped.
    pub const NONE: Self = Self(0);
    pub const PRESCALE_1: Self = Self(1);
    pub const PRESCALE_8: Self = Self(2);
    pub const PRESCALE_64: Self = Self(3);
    pub const PRESCALE_256: Self = Self(4);
    pub const PRESCALE_1024: Self = Self(5);
    /// External clock on T0, falling edge.
    pub const EXTERNAL_FALLING: Self = Self(6);
    /// External clock on T0, rising edge.
    pub const EXTERNAL_RISING: Self = Self(7);

    /// Uses raw bits as-is.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl From<Clock> for u8 {
    fn from(clock: Clock) -> Self {
        clock.0
    }
}

/// Compare output action, written to the COM0A1:0 and COM0B1:0 bits of TCCR0A.
///
/// Actions for channels A and B can be combined with `|`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Port(u8);

impl Port {
    pub const NONE: Self = Self(0);

    pub const TOGGLE_A_ON_COMPARE: Self = Self(COMA0);
    pub const CLEAR_A_ON_COMPARE: Self = Self(COMA1);
    pub const SET_A_ON_COMPARE: Self = Self(COMA0 | COMA1);

    pub const TOGGLE_B_ON_COMPARE: Self = Self(COMB0);
    pub const CLEAR_B_ON_COMPARE: Self = Self(COMB1);
    pub const SET_B_ON_COMPARE: Self = Self(COMB0 | COMB1);

    /// Uses raw bits as-is.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for Port {
    type Output = Self;

    fn bitor(self, other: Self) -> Self::Output {
        Self(self.0 | other.0)
    }
}

impl From<Port> for u8 {
    fn from(port: Port) -> Self {
        port.0
    }
}
