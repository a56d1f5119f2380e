//! The `Period` value type and its two renderers.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::calendar::HistoricalDate;

/// Tri-state exactness marker. The integer codes are part of the public
/// output (`Parsed::fuzzy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fuzzy {
    Approximate,
    #[default]
    Exact,
    Uncertain,
}

impl Fuzzy {
    /// `-1` approximate, `0` exact, `+1` uncertain.
    pub fn code(self) -> i8 {
        match self {
            Fuzzy::Approximate => -1,
            Fuzzy::Exact => 0,
            Fuzzy::Uncertain => 1,
        }
    }

    /// ISO endpoint suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Fuzzy::Approximate => "~",
            Fuzzy::Exact => "",
            Fuzzy::Uncertain => "?",
        }
    }
}

impl Serialize for Fuzzy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

/// Openness of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Express {
    None,
    Before,
    After,
}

/// Shape of a period. Renderers branch on this before touching endpoints, so
/// an open side simply has no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    /// `start` and `end` are both meaningful. BCE centuries store the earlier
    /// year's `12-31` as `start` and the later year's `01-01` as `end`.
    Closed { start: HistoricalDate, end: HistoricalDate },
    /// Open on the left: everything up to and including `end`.
    Before { end: HistoricalDate },
    /// Open on the right: everything from `start` on.
    After { start: HistoricalDate },
    /// No date information at all.
    Empty,
}

/// A numeric `(start year, end year)` pair. Open ends are infinite and an
/// unknown date is `(NaN, NaN)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSpan {
    pub start: f64,
    pub end: f64,
}

impl TimeSpan {
    pub const UNKNOWN: TimeSpan = TimeSpan { start: f64::NAN, end: f64::NAN };

    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn is_unknown(&self) -> bool {
        self.start.is_nan() && self.end.is_nan()
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.start, self.end)
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// An immutable interval of calendar time with an openness flag and a
/// fuzziness tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    span: Span,
    fuzzy: Fuzzy,
}

impl Period {
    pub fn closed(start: HistoricalDate, end: HistoricalDate) -> Self {
        Self { span: Span::Closed { start, end }, fuzzy: Fuzzy::Exact }
    }

    pub fn before(end: HistoricalDate) -> Self {
        Self { span: Span::Before { end }, fuzzy: Fuzzy::Exact }
    }

    pub fn after(start: HistoricalDate) -> Self {
        Self { span: Span::After { start }, fuzzy: Fuzzy::Exact }
    }

    pub fn empty() -> Self {
        Self { span: Span::Empty, fuzzy: Fuzzy::Exact }
    }

    /// Same period with the given fuzziness. Matchers call this once while
    /// building their result.
    pub fn with_fuzzy(self, fuzzy: Fuzzy) -> Self {
        Self { fuzzy, ..self }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn fuzzy(&self) -> Fuzzy {
        self.fuzzy
    }

    pub fn express(&self) -> Express {
        match self.span {
            Span::Before { .. } => Express::Before,
            Span::After { .. } => Express::After,
            Span::Closed { .. } | Span::Empty => Express::None,
        }
    }

    pub fn start(&self) -> Option<HistoricalDate> {
        match self.span {
            Span::Closed { start, .. } | Span::After { start } => Some(start),
            Span::Before { .. } | Span::Empty => None,
        }
    }

    pub fn end(&self) -> Option<HistoricalDate> {
        match self.span {
            Span::Closed { end, .. } | Span::Before { end } => Some(end),
            Span::After { .. } | Span::Empty => None,
        }
    }

    /// Numeric year span.
    ///
    /// ```text
    /// Before { end }       -> (-inf, end.year)
    /// After { start }      -> (start.year, +inf)
    /// Closed { start, end} -> (min, max) of the two years
    /// Empty                -> (NaN, NaN)
    /// ```
    pub fn time_span(&self) -> TimeSpan {
        match self.span {
            Span::Before { end } => TimeSpan::new(f64::NEG_INFINITY, f64::from(end.year)),
            Span::After { start } => TimeSpan::new(f64::from(start.year), f64::INFINITY),
            Span::Closed { start, end } => {
                TimeSpan::new(f64::from(start.year.min(end.year)), f64::from(start.year.max(end.year)))
            }
            Span::Empty => TimeSpan::UNKNOWN,
        }
    }

    /// ISO-8601-like interval: `start/end`, `..end` or `start..`.
    ///
    /// Closed intervals carry the fuzziness suffix (`~` or `?`) on both
    /// endpoints; open intervals never do. `Empty` renders as `None`.
    pub fn iso_format(&self) -> Option<String> {
        match self.span {
            Span::Before { end } => Some(format!("..{end}")),
            Span::After { start } => Some(format!("{start}..")),
            Span::Closed { start, end } => {
                let suffix = self.fuzzy.suffix();
                Some(format!("{start}{suffix}/{end}{suffix}"))
            }
            Span::Empty => None,
        }
    }
}
