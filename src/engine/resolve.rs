//! Per-item resolution.
//!
//! Every input item goes through the same state machine:
//!
//! ```text
//! None / "undatiert" / "unknown" ──▶ Unknown
//! trim + lowercase
//!   └─ language: explicit, else detector, else English
//!        └─ fuzziness (classify) + marker-free core (strip)
//!             ├─ TriggerInfo::scan says compound ─▶ multi::extract ─▶ Dates (if any)
//!             └─ rules in order, first hit ─────────────────────────▶ Dates (one)
//!                                                        otherwise ─▶ NoMatch
//! ```

use std::time::Instant;

use log::{debug, trace};
use once_cell::sync::Lazy;

use super::metrics::RunMetrics;
use super::trigger::TriggerInfo;
use crate::api::Context;
use crate::error::Error;
use crate::fuzzy;
use crate::language::Language;
use crate::period::Fuzzy;
use crate::rules::{self, multi};
use crate::{Match, Range, Rule, Subject};

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(rules::get);

const UNKNOWN_SENTINELS: [&str; 2] = ["undatiert", "unknown"];

#[derive(Debug, Clone)]
pub(crate) enum Resolution {
    /// No input, or an explicit "unknown date" marker.
    Unknown,
    /// Nothing recognized.
    NoMatch,
    /// One or more dates, in emission order.
    Dates(Vec<Match>),
}

#[derive(Debug, Clone)]
pub(crate) struct Resolved {
    pub resolution: Resolution,
    /// Trimmed, lowercased input. Match ranges index into it.
    pub normalized: String,
    pub fuzzy: Fuzzy,
    pub metrics: RunMetrics,
}

pub(crate) fn resolve_item(context: &Context, text: Option<&str>, language: Option<Language>) -> Result<Resolved, Error> {
    let started = Instant::now();
    let mut metrics = RunMetrics::default();

    let normalized = text.map(|t| t.trim().to_lowercase()).unwrap_or_default();
    if text.is_none() || UNKNOWN_SENTINELS.contains(&normalized.as_str()) {
        trace!("unknown date: {text:?}");
        metrics.total = started.elapsed();
        return Ok(Resolved { resolution: Resolution::Unknown, normalized, fuzzy: Fuzzy::Exact, metrics });
    }

    let language = match language {
        Some(language) => language,
        None => {
            metrics.detected = true;
            detect(context, text.unwrap_or_default().trim())
        }
    };
    metrics.language = Some(language);

    let spec = context.languages().get(language)?;
    let fuzzy = fuzzy::classify(&normalized, spec);
    let core = fuzzy::strip_markers(&normalized, spec);
    metrics.fuzzy = fuzzy;
    let subject = Subject { text: &normalized, core: &core, spec, fuzzy };

    let resolution = run(&subject, &mut metrics);
    metrics.total = started.elapsed();
    debug!(
        "resolved {:?} as {} ({:?}) via {}",
        normalized,
        language,
        fuzzy,
        metrics.matched.unwrap_or("nothing")
    );
    Ok(Resolved { resolution, normalized, fuzzy, metrics })
}

fn run(subject: &Subject<'_>, metrics: &mut RunMetrics) -> Resolution {
    let trigger_info = TriggerInfo::scan(subject.text, subject.spec);
    trace!("[trigger_scan] {:?}", trigger_info.triggers);
    if trigger_info.multi() {
        metrics.multi = true;
        if let Some(found) = multi::extract(subject) {
            metrics.matched = found.first().map(|m| m.rule);
            return Resolution::Dates(found);
        }
    }

    for rule in DEFAULT_RULES.iter() {
        metrics.attempted.push(rule.name);
        if let Some(period) = (rule.production)(subject) {
            trace!("[rule] {} matched {:?}", rule.name, subject.core);
            metrics.matched = Some(rule.name);
            let range = Range { start: 0, end: subject.text.len() };
            return Resolution::Dates(vec![Match { period, range, rule: rule.name }]);
        }
    }
    Resolution::NoMatch
}

/// Detector's best guess, English when it has none.
fn detect(context: &Context, text: &str) -> Language {
    match context.detector().detect(&[text]) {
        Ok(languages) => languages.first().copied().unwrap_or(Language::En),
        Err(err) => {
            debug!("{err} for {text:?}, defaulting to English");
            Language::En
        }
    }
}
