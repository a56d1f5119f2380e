//! Centuries, their fractional parts and early/mid/late modifiers, CE and
//! BCE.

use regex::Captures;

use crate::fuzzy;
use crate::language::LanguageSpec;
use crate::period::{Fuzzy, Period};
use crate::rules::portion::{Portion, Unit, YearSpan};
use crate::{Rule, Subject};

/// "19. Jh.", "5th century b.c.", "1st half 5th century", "last third 17th
/// cent", "late 16th century", "fin du XIXe siècle"
pub fn rule_century() -> Rule {
    Rule { name: "century", production: century }
}

/// Tries the fractional form, then the modifier form, then a bare century.
/// A form that matches but does not resolve (a "5th quarter") falls through
/// to the next one.
fn century(subject: &Subject<'_>) -> Option<Period> {
    let spec = subject.spec;
    let patterns = spec.patterns().century.as_ref()?;
    let core = subject.core;

    let resolved = patterns
        .fraction
        .as_ref()
        .and_then(|re| re.captures(core))
        .and_then(|caps| fractional(spec, core, &caps))
        .or_else(|| patterns.modifier.as_ref().and_then(|re| re.captures(core)).and_then(|caps| modified(spec, &caps)))
        .or_else(|| patterns.plain.captures(core).and_then(|caps| whole(spec, &caps)))?;

    let (span, bce) = resolved;
    // An approximate marker on the century wins over an uncertain one.
    let fuzzy = if fuzzy::is_approximate(subject.text, spec) { Fuzzy::Approximate } else { subject.fuzzy };
    Some(span.into_period(bce).with_fuzzy(fuzzy))
}

fn base(spec: &LanguageSpec, caps: &Captures<'_>) -> Option<(YearSpan, bool)> {
    let n = spec.parse_ordinal(caps.name("century")?.as_str())?;
    let bce = caps.name("bc").is_some();
    Some((YearSpan::century(n, bce)?, bce))
}

/// A missing part number means the first part; a "last" token means the
/// final one.
fn fractional(spec: &LanguageSpec, core: &str, caps: &Captures<'_>) -> Option<(YearSpan, bool)> {
    let fraction = spec.fraction(caps.name("frac")?.as_str())?;
    let mut index = match caps.name("part") {
        Some(part) => spec.parse_ordinal(part.as_str())?,
        None => 1,
    };
    if index == 0 || index > fraction.parts() {
        return None;
    }
    if spec.mentions_last(core) {
        index = fraction.parts();
    }
    let (span, bce) = base(spec, caps)?;
    Some((span.take(Unit::Century, Portion::Part { fraction, index })?, bce))
}

fn modified(spec: &LanguageSpec, caps: &Captures<'_>) -> Option<(YearSpan, bool)> {
    let portion = spec.portion(caps.name("portion")?.as_str())?;
    let (span, bce) = base(spec, caps)?;
    Some((span.take(Unit::Century, portion)?, bce))
}

fn whole(spec: &LanguageSpec, caps: &Captures<'_>) -> Option<(YearSpan, bool)> {
    base(spec, caps)
}
