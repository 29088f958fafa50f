//! Waveform-generation mode, clock, and compare output configuration for the ATmega328P's
//! timer/counters.
//!
//! Each timer is configured through a [`Timer`], which writes both of the timer's control
//! registers in one call:
//!
//! ```no_run
//! use timer_modes::{
//!     Timer,
//!     timer0::{Clock, Port, Timer0},
//! };
//!
//! let mut timer = unsafe { Timer::<Timer0>::steal() };
//! timer.set_mode(2, Clock::PRESCALE_64, Port::CLEAR_A_ON_COMPARE);
//! ```
//!
//! Registers are accessed through the [`Register`] trait, so any `u8` can stand in for the
//! hardware.

#![cfg_attr(not(test), no_std)]

pub mod timer0;
pub mod timer1;
pub mod timer2;

mod mmio;
mod timer;

pub use mmio::{Mmio, Register};
pub use timer::{Error, Fragments, Peripheral, Timer};
