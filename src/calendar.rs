//! Calendar primitives.
//!
//! Years follow astronomical numbering: year `0` exists and negative years are
//! BCE (`-500` is 501 BC in traditional numbering, but the crate never converts
//! between the two). Months are `chrono::Month`.
//!
//! Leap years are not modeled: February always has 28 days.

use std::fmt;

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::period::Period;

/// A calendar date whose year may be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoricalDate {
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl HistoricalDate {
    /// Build a date, rejecting months outside 1-12 and days outside the
    /// (non-leap) month length.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        let month = month_from_number(month)?;
        if day == 0 || day > days_in_month(month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// First day of `month` in `year`.
    pub fn first_of(year: i32, month: Month) -> Self {
        Self { year, month, day: 1 }
    }

    /// Last day of `month` in `year`.
    pub fn last_of(year: i32, month: Month) -> Self {
        Self { year, month, day: days_in_month(month) }
    }

    /// Month as 1-12.
    pub fn month_number(&self) -> u32 {
        self.month.number_from_month()
    }
}

impl fmt::Display for HistoricalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", iso_year(self.year), self.month_number(), self.day)
    }
}

/// Year rendering used by the ISO-like format: at least four digits, with a
/// leading `-` for negative years (`-500` -> `-0500`).
pub fn iso_year(year: i32) -> String {
    if year >= 0 { format!("{year:04}") } else { format!("-{:04}", year.unsigned_abs()) }
}

/// Month lengths with February fixed at 28 days.
pub fn days_in_month(month: Month) -> u32 {
    match month {
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

pub(crate) fn month_from_number(month: u32) -> Option<Month> {
    u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok())
}

/// Canonical season names. Every language table maps its tokens onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Month the season starts in.
    pub fn first_month(self) -> Month {
        match self {
            Season::Spring => Month::March,
            Season::Summer => Month::June,
            Season::Autumn => Month::September,
            Season::Winter => Month::December,
        }
    }

    /// Month the season ends in. Winter ends in the following year.
    pub fn last_month(self) -> Month {
        match self {
            Season::Spring => Month::May,
            Season::Summer => Month::August,
            Season::Autumn => Month::November,
            Season::Winter => Month::February,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

/// `[y-01-01, y-12-31]`
pub fn period_for_year(year: i32) -> Period {
    Period::closed(HistoricalDate::first_of(year, Month::January), HistoricalDate::last_of(year, Month::December))
}

/// `[y-m-01, y-m-last]`
pub fn period_for_month(year: i32, month: Month) -> Period {
    Period::closed(HistoricalDate::first_of(year, month), HistoricalDate::last_of(year, month))
}

/// Season of nominal year `year`. Winter runs from December of `year` to the
/// end of February of `year + 1`.
pub fn period_for_season(year: i32, season: Season) -> Period {
    let end_year = if season == Season::Winter { year + 1 } else { year };
    Period::closed(
        HistoricalDate::first_of(year, season.first_month()),
        HistoricalDate::last_of(end_year, season.last_month()),
    )
}

/// A single-day closed period.
pub fn period_for_day(date: HistoricalDate) -> Period {
    Period::closed(date, date)
}
