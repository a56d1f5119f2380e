//! Month-based rules

use crate::calendar::{HistoricalDate, period_for_day, period_for_month};
use crate::period::Period;
use crate::{Rule, Subject};

/// "June 1963", "Okt. 1890", "mars 1871"
pub fn rule_month_year() -> Rule {
    Rule { name: "<month> <year>", production: month_year }
}

fn month_year(subject: &Subject<'_>) -> Option<Period> {
    let caps = subject.spec.patterns().month_year.captures(subject.core)?;
    let month = subject.spec.month(caps.name("month")?.as_str())?;
    let year: i32 = caps.name("year")?.as_str().parse().ok()?;
    Some(period_for_month(year, month).with_fuzzy(subject.fuzzy))
}

/// "January 1, 1856", "August 11, 1958"
pub fn rule_month_day_year() -> Rule {
    Rule { name: "<month> <day>, <year>", production: month_day_year }
}

/// Days past the month's end (February 29 included) are declined.
fn month_day_year(subject: &Subject<'_>) -> Option<Period> {
    let caps = subject.spec.patterns().month_day_year.captures(subject.core)?;
    let month = subject.spec.month(caps.name("month")?.as_str())?;
    let day: u32 = caps.name("day")?.as_str().parse().ok()?;
    let year: i32 = caps.name("year")?.as_str().parse().ok()?;
    let date = HistoricalDate::new(year, month.number_from_month(), day)?;
    Some(period_for_day(date).with_fuzzy(subject.fuzzy))
}
