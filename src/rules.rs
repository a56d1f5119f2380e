//! Date grammars.
//!
//! Single-expression matchers are [`Rule`]s tried in the order [`get`]
//! returns them; the first one that accepts the subject wins. Compound
//! inputs ("(Guss vor 1906) 1897") go through the sweeps in `multi.rs`
//! instead.

#[path = "rules/centuries.rs"]
pub(crate) mod centuries;
#[path = "rules/decades.rs"]
pub(crate) mod decades;
#[path = "rules/intervals.rs"]
pub(crate) mod intervals;
#[path = "rules/months.rs"]
pub(crate) mod months;
#[path = "rules/multi.rs"]
pub(crate) mod multi;
#[path = "rules/portion.rs"]
pub(crate) mod portion;
#[path = "rules/seasons.rs"]
pub(crate) mod seasons;
#[path = "rules/years.rs"]
pub(crate) mod years;

#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;

use crate::Rule;

/// All single-expression rules, highest priority first.
pub(crate) fn get() -> Vec<Rule> {
    vec![
        decades::rule_decade(),
        intervals::rule_year_interval(),
        intervals::rule_before_after(),
        seasons::rule_season_year(),
        months::rule_month_year(),
        months::rule_month_day_year(),
        centuries::rule_century(),
        years::rule_year(),
    ]
}
