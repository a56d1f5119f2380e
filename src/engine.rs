//! Parsing and resolution engine.
//!
//! ## How the parts work together
//!
//! ```text
//! input ── resolve_item (resolve.rs)
//!            - sentinel check, language, fuzziness
//!            - TriggerInfo::scan (trigger.rs)
//!                 ├─ compound  ─▶ rules::multi::extract
//!                 └─ otherwise ─▶ rules::get() in order, first hit wins
//!            - RunMetrics (metrics.rs)
//!                               │
//!                               v
//!                  Resolved { Unknown | NoMatch | Dates(Vec<Match>) }
//! ```
//!
//! Rendering a `Resolved` into the caller's scheme happens in `api.rs`.
//!
//! ## Debugging
//!
//! The engine logs through the `log` facade: `debug` for one line per item
//! and for language fallbacks, `trace` for trigger scans and rule hits.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use resolve::{Resolution, Resolved, resolve_item};
