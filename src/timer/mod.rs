mod error;

pub use error::Error;

use crate::mmio::{Mmio, Register};
use core::marker::PhantomData;

/// The waveform-generation bits a mode contributes to each control register.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fragments {
    pub control_a: u8,
    pub control_b: u8,
}

impl Fragments {
    pub const fn new(control_a: u8, control_b: u8) -> Self {
        Self {
            control_a,
            control_b,
        }
    }
}

/// A timer/counter peripheral's mode table and value domains.
pub trait Peripheral {
    /// Name used in logs and errors.
    const NAME: &'static str;

    /// Mode table, indexed by mode number.
    const MODES: &'static [Fragments];

    /// A mode number that is always within `MODES`.
    type Mode: Copy + Into<u8>;
    /// Bits ORed into control register B.
    type Clock: Copy + Into<u8>;
    /// Bits ORed into control register A.
    type Port: Copy + Into<u8>;
}

/// Configures a timer's waveform-generation mode, clock source, and compare output action.
///
/// Configuration is a full overwrite: both control registers are cleared and then written, so
/// nothing from an earlier configuration survives. Nothing here masks interrupts; if an interrupt
/// handler touches the same registers, wrap the call in a critical section.
#[derive(Debug)]
pub struct Timer<P, A = Mmio, B = Mmio> {
    control_a: A,
    control_b: B,
    peripheral: PhantomData<P>,
}

impl<P, A, B> Timer<P, A, B> {
    /// Creates a timer over the given control registers.
    pub const fn new(control_a: A, control_b: B) -> Self {
        Self {
            control_a,
            control_b,
            peripheral: PhantomData,
        }
    }

    /// Gives back the control registers.
    pub fn release(self) -> (A, B) {
        (self.control_a, self.control_b)
    }
}

impl<P, A, B> Timer<P, A, B>
where
    P: Peripheral,
    A: Register,
    B: Register,
{
    /// Selects mode number `mode` along with the given clock and port action.
    ///
    /// If `mode` has no row in the mode table, the registers are left exactly as they were.
    /// `clock` and `port` are written through without validation.
    pub fn set_mode(&mut self, mode: u8, clock: P::Clock, port: P::Port) {
        if let Err(error) = self.try_set_mode(mode, clock, port) {
            log::warn!("{error}; configuration ignored");
        }
    }

    /// Like [`set_mode`](Self::set_mode), but reports an out-of-range mode.
    pub fn try_set_mode(&mut self, mode: u8, clock: P::Clock, port: P::Port) -> Result<(), Error> {
        let fragments = P::MODES
            .get(usize::from(mode))
            .ok_or(Error::ModeOutOfRange {
                timer: P::NAME,
                mode,
                modes: P::MODES.len(),
            })?;
        self.write(mode, *fragments, clock.into(), port.into());
        Ok(())
    }

    /// Selects a typed mode.
    ///
    /// For the built-in timers every `Mode` has a row in the table. A `Peripheral` whose `Mode`
    /// can name a missing row gets the same no-op as [`set_mode`](Self::set_mode).
    pub fn configure(&mut self, mode: P::Mode, clock: P::Clock, port: P::Port) {
        self.set_mode(mode.into(), clock, port);
    }

    /// Reads the current contents of both control registers.
    pub fn control(&self) -> Fragments {
        Fragments::new(self.control_a.read(), self.control_b.read())
    }

    fn write(&mut self, mode: u8, fragments: Fragments, clock: u8, port: u8) {
        self.control_a.write(0);
        self.control_b.write(0);

        let control_a = fragments.control_a | port;
        let control_b = fragments.control_b | clock;
        self.control_a.write(control_a);
        self.control_b.write(control_b);

        log::trace!(
            "{} configured for mode {mode}: control A {control_a:#04x}, control B {control_b:#04x}",
            P::NAME
        );
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{Error, Fragments, Peripheral, Timer};
    use crate::mmio::Register;
    use claims::{assert_err_eq, assert_ok};
    use core::cell::RefCell;

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub(crate) enum Target {
        A,
        B,
    }

    /// A register that appends every write to a shared log.
    pub(crate) struct Recording<'a> {
        target: Target,
        value: u8,
        log: &'a RefCell<Vec<(Target, u8)>>,
    }

    impl<'a> Recording<'a> {
        pub(crate) fn new(target: Target, value: u8, log: &'a RefCell<Vec<(Target, u8)>>) -> Self {
            Self { target, value, log }
        }
    }

    impl Register for Recording<'_> {
        fn read(&self) -> u8 {
            self.value
        }

        fn write(&mut self, value: u8) {
            self.value = value;
            self.log.borrow_mut().push((self.target, value));
        }
    }

    #[derive(Debug)]
    struct Test;

    #[derive(Clone, Copy, Debug)]
    struct Bits(u8);

    impl From<Bits> for u8 {
        fn from(bits: Bits) -> Self {
            bits.0
        }
    }

    impl Peripheral for Test {
        const NAME: &'static str = "test";
        const MODES: &'static [Fragments] = &[
            Fragments::new(0b00, 0b0000),
            Fragments::new(0b01, 0b0000),
            Fragments::new(0b10, 0b1000),
        ];

        type Mode = Bits;
        type Clock = Bits;
        type Port = Bits;
    }

    #[test]
    fn set_mode_writes_fragments_and_bits() {
        let mut timer = Timer::<Test, _, _>::new(0u8, 0u8);

        timer.set_mode(2, Bits(0b0000_0011), Bits(0b1000_0000));

        assert_eq!(timer.control(), Fragments::new(0b1000_0010, 0b0000_1011));
    }

    #[test]
    fn set_mode_clears_before_setting() {
        let log = RefCell::new(Vec::new());
        let mut timer = Timer::<Test, _, _>::new(
            Recording::new(Target::A, 0xff, &log),
            Recording::new(Target::B, 0xff, &log),
        );

        timer.set_mode(1, Bits(0b0000_0100), Bits(0b0001_0000));

        assert_eq!(
            *log.borrow(),
            [
                (Target::A, 0),
                (Target::B, 0),
                (Target::A, 0b0001_0001),
                (Target::B, 0b0000_0100),
            ]
        );
        assert_eq!(timer.control(), Fragments::new(0b0001_0001, 0b0000_0100));
    }

    #[test]
    fn set_mode_out_of_range_no_writes() {
        let log = RefCell::new(Vec::new());
        let mut timer = Timer::<Test, _, _>::new(
            Recording::new(Target::A, 0x5a, &log),
            Recording::new(Target::B, 0xa5, &log),
        );

        timer.set_mode(3, Bits(1), Bits(1));

        assert!(log.borrow().is_empty());
        assert_eq!(timer.control(), Fragments::new(0x5a, 0xa5));
    }

    #[test]
    fn set_mode_replaces_previous_configuration() {
        let mut timer = Timer::<Test, _, _>::new(0u8, 0u8);

        timer.set_mode(2, Bits(0b0000_0111), Bits(0b1111_0000));
        timer.set_mode(1, Bits(0b0000_0001), Bits(0));

        assert_eq!(timer.control(), Fragments::new(0b0000_0001, 0b0000_0001));
    }

    #[test]
    fn set_mode_idempotent() {
        let mut timer = Timer::<Test, _, _>::new(0u8, 0u8);

        timer.set_mode(2, Bits(0b0000_0101), Bits(0b0100_0000));
        let first = timer.control();
        timer.set_mode(2, Bits(0b0000_0101), Bits(0b0100_0000));

        assert_eq!(timer.control(), first);
    }

    #[test]
    fn try_set_mode_ok() {
        let mut timer = Timer::<Test, _, _>::new(0u8, 0u8);

        assert_ok!(timer.try_set_mode(0, Bits(0b0000_0001), Bits(0)));
        assert_eq!(timer.control(), Fragments::new(0, 0b0000_0001));
    }

    #[test]
    fn try_set_mode_out_of_range() {
        let mut timer = Timer::<Test, _, _>::new(0x12u8, 0x34u8);

        assert_err_eq!(
            timer.try_set_mode(200, Bits(0), Bits(0)),
            Error::ModeOutOfRange {
                timer: "test",
                mode: 200,
                modes: 3,
            }
        );
        assert_eq!(timer.control(), Fragments::new(0x12, 0x34));
    }

    #[test]
    fn configure_writes_fragments_and_bits() {
        let mut timer = Timer::<Test, _, _>::new(0xffu8, 0xffu8);

        timer.configure(Bits(1), Bits(0b0000_0010), Bits(0b0010_0000));

        assert_eq!(timer.control(), Fragments::new(0b0010_0001, 0b0000_0010));
    }

    #[test]
    fn configure_mode_missing_from_table() {
        let log = RefCell::new(Vec::new());
        let mut timer = Timer::<Test, _, _>::new(
            Recording::new(Target::A, 0x3c, &log),
            Recording::new(Target::B, 0xc3, &log),
        );

        timer.configure(Bits(3), Bits(0b0000_0001), Bits(0b1000_0000));

        assert!(log.borrow().is_empty());
        assert_eq!(timer.control(), Fragments::new(0x3c, 0xc3));
    }

    #[test]
    fn try_set_mode_large_table_reports_full_length() {
        #[derive(Debug)]
        struct Wide;

        impl Peripheral for Wide {
            const NAME: &'static str = "wide";
            const MODES: &'static [Fragments] = &[Fragments::new(0, 0); 256];

            type Mode = Bits;
            type Clock = Bits;
            type Port = Bits;
        }

        let mut timer = Timer::<Wide, _, _>::new(0u8, 0u8);

        assert_ok!(timer.try_set_mode(u8::MAX, Bits(0b0000_0001), Bits(0)));
        assert_eq!(timer.control(), Fragments::new(0, 0b0000_0001));
        assert_eq!(
            format!(
                "{}",
                Error::ModeOutOfRange {
                    timer: Wide::NAME,
                    mode: 0,
                    modes: Wide::MODES.len(),
                }
            ),
            "mode 0 is out of range for wide; valid modes are 0 through 255"
        );
    }

    #[test]
    fn release_returns_registers() {
        let mut timer = Timer::<Test, _, _>::new(0u8, 0u8);

        timer.set_mode(2, Bits(0b0000_0001), Bits(0b0100_0000));

        assert_eq!(timer.release(), (0b0100_0010, 0b0000_1001));
    }

    #[test]
    fn borrowed_registers() {
        let mut control_a = 0u8;
        let mut control_b = 0u8;

        Timer::<Test, _, _>::new(&mut control_a, &mut control_b).set_mode(
            1,
            Bits(0b0000_0011),
            Bits(0b1100_0000),
        );

        assert_eq!(control_a, 0b1100_0001);
        assert_eq!(control_b, 0b0000_0011);
    }
}
