//! Sub-ranges of centuries and decades: halves, thirds, quarters and the
//! early/mid/late modifiers.

use chrono::Month;

use crate::calendar::HistoricalDate;
use crate::period::Period;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Fraction {
    Half,
    Third,
    Quarter,
}

impl Fraction {
    pub fn parts(self) -> u32 {
        match self {
            Fraction::Half => 2,
            Fraction::Third => 3,
            Fraction::Quarter => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Portion {
    /// 1-based part of a fractional split.
    Part { fraction: Fraction, index: u32 },
    Early,
    Mid,
    Late,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    Century,
    Decade,
}

impl Unit {
    /// Year offsets `(first, last)` inside the unit for a modifier.
    fn modifier_offsets(self, portion: Portion) -> Option<(i32, i32)> {
        match (self, portion) {
            (Unit::Century, Portion::Early) => Some((0, 14)),
            (Unit::Century, Portion::Mid) => Some((45, 54)),
            (Unit::Century, Portion::Late) => Some((85, 99)),
            (Unit::Decade, Portion::Early) => Some((0, 2)),
            (Unit::Decade, Portion::Mid) => Some((4, 5)),
            (Unit::Decade, Portion::Late) => Some((7, 9)),
            (_, Portion::Part { .. }) => None,
        }
    }
}

/// An inclusive run of years, `first <= last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct YearSpan {
    pub first: i32,
    pub last: i32,
}

impl YearSpan {
    /// Century `n` (1-based). CE: `[100(n-1)+1, 100n]`; BCE:
    /// `[-100n, -(100(n-1)+1)]`.
    pub fn century(n: u32, bce: bool) -> Option<Self> {
        if n == 0 {
            return None;
        }
        let n = i32::try_from(n).ok()?;
        let (first, last) = (100 * (n - 1) + 1, 100 * n);
        Some(if bce { Self { first: -last, last: -first } } else { Self { first, last } })
    }

    pub fn decade(start: i32) -> Self {
        Self { first: start, last: start + 9 }
    }

    pub fn len(self) -> i32 {
        self.last - self.first + 1
    }

    /// Narrow the span to `portion`. Fractional parts use floor division and
    /// the final part absorbs the remainder; an index outside `1..=parts`
    /// yields `None`.
    pub fn take(self, unit: Unit, portion: Portion) -> Option<Self> {
        match portion {
            Portion::Part { fraction, index } => {
                let parts = fraction.parts();
                if index == 0 || index > parts {
                    return None;
                }
                let parts = i32::try_from(parts).ok()?;
                let index = i32::try_from(index).ok()?;
                let size = self.len() / parts;
                let first = self.first + (index - 1) * size;
                let last = if index == parts { self.last } else { first + size - 1 };
                Some(Self { first, last })
            }
            _ => {
                let (from, to) = unit.modifier_offsets(portion)?;
                Some(Self { first: self.first + from, last: (self.first + to).min(self.last) })
            }
        }
    }

    /// CE spans run `first-01-01 .. last-12-31`. BCE spans keep the
    /// mirrored convention: `first-12-31 .. last-01-01`.
    pub fn into_period(self, bce: bool) -> Period {
        if bce {
            Period::closed(
                HistoricalDate::last_of(self.first, Month::December),
                HistoricalDate::first_of(self.last, Month::January),
            )
        } else {
            Period::closed(
                HistoricalDate::first_of(self.first, Month::January),
                HistoricalDate::last_of(self.last, Month::December),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(fraction: Fraction, index: u32) -> Portion {
        Portion::Part { fraction, index }
    }

    #[test]
    fn centuries() {
        assert_eq!(YearSpan::century(19, false), Some(YearSpan { first: 1801, last: 1900 }));
        assert_eq!(YearSpan::century(1, true), Some(YearSpan { first: -100, last: -1 }));
        assert_eq!(YearSpan::century(5, true), Some(YearSpan { first: -500, last: -401 }));
        assert_eq!(YearSpan::century(0, false), None);
    }

    #[test]
    fn fractional_parts() {
        let c17 = YearSpan::century(17, false).unwrap();
        assert_eq!(c17.take(Unit::Century, part(Fraction::Third, 3)), Some(YearSpan { first: 1667, last: 1700 }));
        assert_eq!(c17.take(Unit::Century, part(Fraction::Third, 1)), Some(YearSpan { first: 1601, last: 1633 }));

        let c5 = YearSpan::century(5, false).unwrap();
        assert_eq!(c5.take(Unit::Century, part(Fraction::Half, 1)), Some(YearSpan { first: 401, last: 450 }));
        assert_eq!(c5.take(Unit::Century, part(Fraction::Quarter, 4)), Some(YearSpan { first: 476, last: 500 }));
        assert_eq!(c5.take(Unit::Century, part(Fraction::Quarter, 5)), None);
    }

    #[test]
    fn modifiers() {
        let c16 = YearSpan::century(16, false).unwrap();
        assert_eq!(c16.take(Unit::Century, Portion::Late), Some(YearSpan { first: 1586, last: 1600 }));
        let c12 = YearSpan::century(12, false).unwrap();
        assert_eq!(c12.take(Unit::Century, Portion::Mid), Some(YearSpan { first: 1146, last: 1155 }));
        let d = YearSpan::decade(1880);
        assert_eq!(d.take(Unit::Decade, Portion::Mid), Some(YearSpan { first: 1884, last: 1885 }));
        assert_eq!(d.take(Unit::Decade, Portion::Early), Some(YearSpan { first: 1880, last: 1882 }));
    }

    #[test]
    fn bce_periods_are_mirrored() {
        let p = YearSpan::century(5, true).unwrap().into_period(true);
        assert_eq!(p.iso_format().as_deref(), Some("-0500-12-31/-0401-01-01"));
    }
}
