use core::{
    fmt,
    fmt::{Display, Formatter},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The requested mode has no row in the timer's mode table.
    ModeOutOfRange {
        timer: &'static str,
        mode: u8,
        modes: usize,
    },
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::ModeOutOfRange { timer, mode, modes } => write!(
                formatter,
                "mode {mode} is out of range for {timer}; valid modes are 0 through {}",
                modes.saturating_sub(1)
            ),
        }
    }
}

impl core::error::Error for Error {}
