//! Toggles OC1A (Arduino D9) every 1000 clock cycles using timer 1 in CTC mode.

#![no_std]
#![no_main]

use avr_device::atmega328p::Peripherals;
use panic_halt as _;
use timer_modes::{
    Timer,
    timer1::{Clock, Mode, Port, Timer1},
};

#[avr_device::entry]
fn main() -> ! {
    let Some(dp) = Peripherals::take() else {
        loop {}
    };

    // Nothing may touch timer 1 or TEMP while it is being set up.
    avr_device::interrupt::free(|_| {
        dp.PORTB.ddrb.modify(|_, w| w.pb1().set_bit());

        dp.TC1.tcnt1.write(|w| unsafe { w.bits(0) });
        dp.TC1.ocr1a.write(|w| unsafe { w.bits(999) });

        // TCCR1A and TCCR1B are only written through this handle.
        let mut timer = unsafe { Timer::<Timer1>::steal() };
        timer.configure(
            Mode::CTC_OCR1A,
            Clock::PRESCALE_1,
            Port::TOGGLE_A_ON_COMPARE,
        );
    });

    loop {}
}
