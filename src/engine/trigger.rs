//! Trigger scanning (input pre-classification).
//!
//! Decides, before any grammar runs, whether an input probably holds more
//! than one date. The scan is a heuristic: a false positive only costs a
//! round of multi-date sweeps that find nothing, after which the
//! single-expression rules still run.

use bitflags::bitflags;

use crate::language::LanguageSpec;

bitflags! {
    /// Coarse signals found in the normalized input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Triggers: u8 {
        /// A day-month-year date such as "13. juli 1882".
        const DAY_MONTH_YEAR = 1 << 0;
        /// "(" or ")".
        const PARENTHESIS = 1 << 1;
        /// " - " between two expressions.
        const SPACED_DASH = 1 << 2;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub triggers: Triggers,
}

impl TriggerInfo {
    /// Scan lowercased `text` using `spec`'s month grammar.
    pub fn scan(text: &str, spec: &LanguageSpec) -> Self {
        let mut triggers = Triggers::empty();
        if spec.patterns().day_month_year.is_match(text) {
            triggers |= Triggers::DAY_MONTH_YEAR;
        }
        if text.contains(['(', ')']) {
            triggers |= Triggers::PARENTHESIS;
        }
        if text.contains(" - ") {
            triggers |= Triggers::SPACED_DASH;
        }
        Self { triggers }
    }

    /// Should the multi-date sweeps run?
    pub fn multi(&self) -> bool {
        !self.triggers.is_empty()
    }
}
