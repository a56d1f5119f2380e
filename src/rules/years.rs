//! Plain years and the year-token helpers shared by other grammars.

use crate::calendar::period_for_year;
use crate::period::Period;
use crate::{Range, Rule, Subject};

/// "1460", "-440"
pub fn rule_year() -> Rule {
    Rule { name: "year", production: year }
}

fn year(subject: &Subject<'_>) -> Option<Period> {
    let caps = regex!(r"^(-?\d{3,4})$").captures(subject.core)?;
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    Some(period_for_year(year).with_fuzzy(subject.fuzzy))
}

/// The year in `m`, which matched `-?\d{3,4}` somewhere in `text`.
///
/// A `-` glued to a preceding digit is a range dash ("1880-1890"), not a
/// sign, and is left out of both the value and the returned range. A match
/// cut out of a longer digit run ("12345") is no year.
pub(crate) fn year_at(text: &str, m: regex::Match<'_>) -> Option<(i32, Range)> {
    let mut start = m.start();
    let mut digits = m.as_str();
    let digit_before = text[..start].chars().next_back().is_some_and(|c| c.is_ascii_digit());
    match digits.strip_prefix('-') {
        Some(unsigned) if digit_before => {
            digits = unsigned;
            start += 1;
        }
        None if digit_before => return None,
        _ => {}
    }
    if text[m.end()..].chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    let year = digits.parse().ok()?;
    Some((year, Range { start, end: m.end() }))
}

/// The last year number in `text`.
pub(crate) fn last_year(text: &str) -> Option<i32> {
    regex!(r"-?\d{3,4}").find_iter(text).filter_map(|m| year_at(text, m)).map(|(year, _)| year).last()
}
