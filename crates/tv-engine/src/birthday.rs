//! Birthday lookup.
//!
//! Birthdates are stored as raw strings in one of two shapes: a full
//! `YYYY-MM-DD` date, or a year-less day/month pair (`DD-MM`). Year-less
//! values that are not a valid `DD-MM` but are a valid `MM-DD` (for
//! example `03-15`) are read as month first.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use tv_roster::RosterAccess;

/// A parsed birthdate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Birthdate {
    /// A full calendar date.
    Full(NaiveDate),
    /// Day and month only.
    DayMonth {
        /// Day of month (1-31).
        day: u32,
        /// Month (1-12).
        month: u32,
    },
}

fn valid_day_month(day: u32, month: u32) -> bool {
    // 2000 is a leap year, so 29 Feb is accepted.
    NaiveDate::from_ymd_opt(2000, month, day).is_some()
}

impl Birthdate {
    /// Parse a stored birthdate. Returns `None` for anything malformed.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.len() == 10 {
            return NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(Self::Full);
        }

        let (a, b) = raw.split_once('-')?;
        let short = |s: &str| !s.is_empty() && s.len() <= 2 && s.bytes().all(|c| c.is_ascii_digit());
        if !short(a) || !short(b) {
            return None;
        }
        let a: u32 = a.parse().ok()?;
        let b: u32 = b.parse().ok()?;

        if valid_day_month(a, b) {
            Some(Self::DayMonth { day: a, month: b })
        } else if valid_day_month(b, a) {
            Some(Self::DayMonth { day: b, month: a })
        } else {
            None
        }
    }

    /// The `(day, month)` this birthday recurs on.
    pub fn day_month(&self) -> (u32, u32) {
        match self {
            Self::Full(date) => (date.day(), date.month()),
            Self::DayMonth { day, month } => (*day, *month),
        }
    }

    /// Whether this birthday falls on `date`, ignoring the year.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.day_month() == (date.day(), date.month())
    }
}

/// Everyone on the roster whose birthday is `today`, in roster order.
///
/// Missing or malformed birthdates are skipped.
pub fn todays_birthdays<S: RosterAccess + ?Sized>(store: &S, today: NaiveDate) -> Vec<String> {
    store
        .people()
        .iter()
        .filter(|name| {
            let Some(raw) = store.birthdate(name) else {
                return false;
            };
            match Birthdate::parse(raw) {
                Some(bd) => bd.falls_on(today),
                None => {
                    log::trace!("ignoring unreadable birthdate {raw:?} for {name}");
                    false
                }
            }
        })
        .cloned()
        .collect()
}
