//! Injected time source.

use chrono::{Local, NaiveDateTime};

/// Where the store reads "now" from.
///
/// Time-dependent games (birthday check, role modes, the chaos selector)
/// only ever see the time through this, so tests and reproducible CLI runs
/// can pin it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Local wall-clock time.
    #[default]
    System,
    /// Always the given instant.
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Current local date and time according to this clock.
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Self::System => Local::now().naive_local(),
            Self::Fixed(at) => *at,
        }
    }
}
