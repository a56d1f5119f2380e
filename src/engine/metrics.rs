//! Engine run metrics.
//!
//! A [`RunMetrics`] is filled in for every resolved item. Collecting it is
//! cheap (a few names and a timer); the verbose API turns it into
//! `ParseDetails`.

use std::time::Duration;

use crate::language::Language;
use crate::period::Fuzzy;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the item.
    pub total: Duration,
    /// Language the item was parsed as. `None` for sentinel inputs that never
    /// reached language resolution.
    pub language: Option<Language>,
    /// Whether `language` came from the detector (or its English default).
    pub detected: bool,
    pub fuzzy: Fuzzy,
    /// Whether the multi-date trigger fired.
    pub multi: bool,
    /// Rules tried, in order.
    pub attempted: Vec<&'static str>,
    /// Rule (or sweep) that produced the first result.
    pub matched: Option<&'static str>,
}
