pub(crate) mod timer;

/// Read/write access to a single 8-bit control register.
///
/// Hardware access goes through [`Mmio`]. A plain `u8` also implements this trait and can stand
/// in for a register when no hardware is present.
pub trait Register {
    fn read(&self) -> u8;

    fn write(&mut self, value: u8);
}

impl Register for u8 {
    fn read(&self) -> u8 {
        *self
    }

    fn write(&mut self, value: u8) {
        *self = value;
    }
}

impl<R> Register for &mut R
where
    R: Register + ?Sized,
{
    fn read(&self) -> u8 {
        (**self).read()
    }

    fn write(&mut self, value: u8) {
        (**self).write(value)
    }
}

/// A memory-mapped register accessed with volatile reads and writes.
#[derive(Debug)]
pub struct Mmio(*mut u8);

impl Mmio {
    /// # Safety
    /// `address` must point to a readable and writable register for as long as this value is
    /// used, and nothing else may write it concurrently.
    pub const unsafe fn new(address: *mut u8) -> Self {
        Self(address)
    }
}

impl Register for Mmio {
    fn read(&self) -> u8 {
        unsafe { self.0.read_volatile() }
    }

    fn write(&mut self, value: u8) {
        unsafe { self.0.write_volatile(value) }
    }
}
