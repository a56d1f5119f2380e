//! Decades, optionally narrowed by early/mid/late.

use crate::period::Period;
use crate::rules::portion::{Unit, YearSpan};
use crate::{Rule, Subject};

/// "1840s", "1760er Jahre", "années 1880", "mid-1880s", "Ende der 1880er Jahre"
pub fn rule_decade() -> Rule {
    Rule { name: "decade", production: decade }
}

fn decade(subject: &Subject<'_>) -> Option<Period> {
    let caps = subject.spec.patterns().decades.iter().find_map(|re| re.captures(subject.core))?;
    let start: i32 = caps.name("decade")?.as_str().parse().ok()?;
    let mut span = YearSpan::decade(start);
    if let Some(token) = caps.name("portion") {
        span = span.take(Unit::Decade, subject.spec.portion(token.as_str())?)?;
    }
    Some(span.into_period(false).with_fuzzy(subject.fuzzy))
}
