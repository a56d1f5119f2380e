//! Season-based rules

use crate::calendar::period_for_season;
use crate::period::Period;
use crate::{Rule, Subject};

/// "Autumn 1945", "Sommer 1907", "hiver 1870"
pub fn rule_season_year() -> Rule {
    Rule { name: "<season> <year>", production: season_year }
}

fn season_year(subject: &Subject<'_>) -> Option<Period> {
    let caps = subject.spec.patterns().season_year.captures(subject.core)?;
    let season = subject.spec.season(caps.name("season")?.as_str())?;
    let year: i32 = caps.name("year")?.as_str().parse().ok()?;
    Some(period_for_season(year, season).with_fuzzy(subject.fuzzy))
}
