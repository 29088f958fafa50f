//! Timer/counter 1, the 16-bit timer.
//!
//! Sixteen waveform-generation modes are spread over four bits: WGM11:0 in TCCR1A and WGM13:2 in
//! TCCR1B. The external clock input T1 is PD5 (Arduino D5). Compare output A drives PB1 (D9) and
//! compare output B drives PB2 (D10).
//!
//! ```no_run
//! use timer_modes::{
//!     Timer,
//!     timer1::{Clock, Mode, Port, Timer1},
//! };
//!
//! // CTC, top = OCR1A, toggling OC1A on every match.
//! let mut timer = unsafe { Timer::<Timer1>::steal() };
//! timer.configure(
//!     Mode::CTC_OCR1A,
//!     Clock::PRESCALE_1,
//!     Port::TOGGLE_A_ON_COMPARE,
//! );
//! ```

use crate::{
    mmio::{
        Mmio,
        timer::{
            TCCR1A, TCCR1B,
            control_a::{COMA0, COMA1, COMB0, COMB1, WGM0, WGM1},
            control_b::{WGM2, WGM3},
        },
    },
    timer::{Error, Fragments, Peripheral, Timer},
};
use core::{
    fmt::{self, Display, Formatter},
    ops::BitOr,
};
use deranged::RangedU8;

/// Waveform-generation bits for each mode, as (TCCR1A, TCCR1B).
pub const MODES: [Fragments; 16] = [
    Fragments::new(0, 0),
    Fragments::new(WGM0, 0),
    Fragments::new(WGM1, 0),
    Fragments::new(WGM0 | WGM1, 0),
    Fragments::new(0, WGM2),
    Fragments::new(WGM0, WGM2),
    Fragments::new(WGM1, WGM2),
    Fragments::new(WGM0 | WGM1, WGM2),
    Fragments::new(0, WGM3),
    Fragments::new(WGM0, WGM3),
    Fragments::new(WGM1, WGM3),
    Fragments::new(WGM0 | WGM1, WGM3),
    Fragments::new(0, WGM2 | WGM3),
    Fragments::new(WGM0, WGM2 | WGM3),
    Fragments::new(WGM1, WGM2 | WGM3),
    Fragments::new(WGM0 | WGM1, WGM2 | WGM3),
];

/// Marker for timer/counter 1.
#[derive(Debug)]
pub struct Timer1;

impl Peripheral for Timer1 {
    const NAME: &'static str = "timer1";
    const MODES: &'static [Fragments] = &MODES;

    type Mode = Mode;
    type Clock = Clock;
    type Port = Port;
}

impl Timer<Timer1> {
    /// Creates a handle to the hardware TCCR1A and TCCR1B registers.
    ///
    /// # Safety
    /// Must be running on an ATmega328P, and no other handle to timer 1 may be in use.
    pub const unsafe fn steal() -> Self {
        unsafe { Self::new(Mmio::new(TCCR1A), Mmio::new(TCCR1B)) }
    }
}

/// A waveform-generation mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mode(RangedU8<0, 15>);

impl Mode {
    /// Normal, top = 0xFFFF.
    pub const NORMAL: Self = Self(RangedU8::new_static::<0>());
    /// PWM, phase correct, 8-bit, top = 0x00FF.
    pub const PWM_PHASE_CORRECT_8_BIT: Self = Self(RangedU8::new_static::<1>());
    /// PWM, phase correct, 9-bit, top = 0x01FF.
    pub const PWM_PHASE_CORRECT_9_BIT: Self = Self(RangedU8::new_static::<2>());
    /// PWM, phase correct, 10-bit, top = 0x03FF.
    pub const PWM_PHASE_CORRECT_10_BIT: Self = Self(RangedU8::new_static::<3>());
    /// CTC, top = OCR1A.
    pub const CTC_OCR1A: Self = Self(RangedU8::new_static::<4>());
    /// Fast PWM, 8-bit, top = 0x00FF.
    pub const FAST_PWM_8_BIT: Self = Self(RangedU8::new_static::<5>());
    /// Fast PWM, 9-bit, top = 0x01FF.
    pub const FAST_PWM_9_BIT: Self = Self(RangedU8::new_static::<6>());
    /// Fast PWM, 10-bit, top = 0x03FF.
    pub const FAST_PWM_10_BIT: Self = Self(RangedU8::new_static::<7>());
    /// PWM, phase and frequency correct, top = ICR1.
    pub const PWM_PHASE_FREQUENCY_CORRECT_ICR1: Self = Self(RangedU8::new_static::<8>());
    /// PWM, phase and frequency correct, top = OCR1A.
    pub const PWM_PHASE_FREQUENCY_CORRECT_OCR1A: Self = Self(RangedU8::new_static::<9>());
    /// PWM, phase correct, top = ICR1.
    pub const PWM_PHASE_CORRECT_ICR1: Self = Self(RangedU8::new_static::<10>());
    /// PWM, phase correct, top = OCR1A.
    pub const PWM_PHASE_CORRECT_OCR1A: Self = Self(RangedU8::new_static::<11>());
    /// CTC, top = ICR1.
    pub const CTC_ICR1: Self = Self(RangedU8::new_static::<12>());
    /// Fast PWM, top = ICR1.
    pub const FAST_PWM_ICR1: Self = Self(RangedU8::new_static::<14>());
    /// Fast PWM, top = OCR1A.
    pub const FAST_PWM_OCR1A: Self = Self(RangedU8::new_static::<15>());

    /// Creates a mode from a ranged mode number. Reserved rows are accepted.
    pub const fn new(value: RangedU8<0, 15>) -> Self {
        Self(value)
    }

    /// Whether the datasheet reserves this mode.
    pub fn is_reserved(self) -> bool {
        self.0.get() == 13
    }
}

impl Display for Mode {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(match self.0.get() {
            0 => "normal, top = 0xFFFF",
            1 => "PWM, phase correct, 8-bit, top = 0x00FF",
            2 => "PWM, phase correct, 9-bit, top = 0x01FF",
            3 => "PWM, phase correct, 10-bit, top = 0x03FF",
            4 => "CTC, top = OCR1A",
            5 => "fast PWM, 8-bit, top = 0x00FF",
            6 => "fast PWM, 9-bit, top = 0x01FF",
            7 => "fast PWM, 10-bit, top = 0x03FF",
            8 => "PWM, phase and frequency correct, top = ICR1",
            9 => "PWM, phase and frequency correct, top = OCR1A",
            10 => "PWM, phase correct, top = ICR1",
            11 => "PWM, phase correct, top = OCR1A",
            12 => "CTC, top = ICR1",
            14 => "fast PWM, top = ICR1",
            15 => "fast PWM, top = OCR1A",
            _ => "reserved",
        })
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        RangedU8::new(mode).map(Self).ok_or(Error::ModeOutOfRange {
            timer: Timer1::NAME,
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

/// Clock source, written to the CS12:0 bits of TCCR1B.
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
    /// External clock on T1, falling edge.
    pub const EXTERNAL_FALLING: Self = Self(6);
    /// External clock on T1, rising edge.
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

/// Compare output action, written to the COM1A1:0 and COM1B1:0 bits of TCCR1A.
///
/// Actions for channels A and B can be combined with `|`. What toggle, clear, and set mean in the
/// PWM modes is up to the hardware; see the datasheet's compare output mode tables.
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
