use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| CoreError::InvalidBirthday)
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Days from `today` until the next anniversary, `0` when it is today.
    ///
    /// A Feb 29 birthday falls on Feb 28 in non-leap years.
    pub fn days_until_next(&self, today: NaiveDate) -> Option<i64> {
        let this_year = anniversary_in(today.year(), self.0)?;
        let next = if this_year >= today {
            this_year
        } else {
            anniversary_in(today.year() + 1, self.0)?
        };
        Some((next - today).num_days())
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

fn anniversary_in(year: i32, birthday: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}
