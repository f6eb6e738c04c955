//! Recognition and reconciliation engine.
//!
//! The engine is split into focused submodules under `src/engine/`, re-exported
//! here so the rest of the crate can use stable paths (`crate::engine::RuleChain`,
//! `crate::engine::BucketMask`, ...).
//!
//! ## How the parts work together
//!
//! ```text
//! raw string ── sanitize (sanitize.rs)
//!                  │
//!                  v
//!       TriggerInfo::scan (trigger.rs) ── BucketMask
//!                  │
//!                  v
//!       RuleChain::recognize (chain.rs)
//!         - walk rules in fixed order
//!         - skip rules whose buckets are absent
//!         - first recognized DateRange wins
//!                  │
//!                  v
//!            Recognition (metrics.rs)
//!
//! event / start / end ── reconcile (reconcile.rs) ── EventDates
//!   - split event on " and ", recognize each token
//!   - sentinel-avoiding min/max
//!   - start/end range, precedence, growth vs. containment
//! ```
//!
//! ## Responsibilities by module
//!
//! - `sanitize.rs`: strips brackets, braces, leading qualifiers and trailing `?`.
//! - `trigger.rs`: scans the sanitized input for coarse buckets.
//! - `chain.rs`: the ordered rule walk.
//! - `metrics.rs`: what a recognition reports besides the range.
//! - `reconcile.rs`: merges the three date columns into one triple.
//!
//! ## Adding new rules
//!
//! - Add a variant to `rules::Rule`, slot it into `Rule::ALL` at the right
//!   priority and declare its buckets.
//! - If it needs a new coarse trigger, add a `BucketMask` bit and teach
//!   `TriggerInfo::scan` to detect it.
//!
//! ## Debugging
//!
//! The chain logs every skip, decline and match through `log`. The `archdate`
//! binary shows them with `-vv` or `ARCHDATE_DEBUG_RULES=1`.

#[path = "engine/chain.rs"]
mod chain;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/reconcile.rs"]
mod reconcile;
#[path = "engine/sanitize.rs"]
mod sanitize;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use chain::RuleChain;
pub use metrics::Recognition;
pub(crate) use reconcile::{NULL, reconcile};
pub use sanitize::sanitize;
pub(crate) use trigger::BucketMask;
