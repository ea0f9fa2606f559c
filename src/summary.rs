//! Per-site aggregate views derived from the launch table.
//!
//! Both aggregations are pure functions of the immutable table, so the
//! dashboard context computes them once and serves the cached maps for the
//! process lifetime. `BTreeMap` keeps iteration deterministic, which keeps
//! chart slice order stable across recomputes.

use std::collections::BTreeMap;

use crate::launches::LaunchRecord;

/// Successful-launch count per site. Sites with zero successes are absent.
pub type SiteSuccessSummary = BTreeMap<String, u64>;

/// Launch count per outcome, for one site.
pub type OutcomeCounts = BTreeMap<String, u64>;

/// Launch count per (site, outcome) pair. Only pairs that occur are present.
pub type SiteOutcomeMatrix = BTreeMap<String, OutcomeCounts>;

/// Count successful launches per site.
///
/// A record counts when its outcome is in `success_outcomes`. Sites whose
/// launches all failed contribute no entry, matching the pie-chart use case
/// where absent sites contribute no slice.
pub fn success_summary(
    records: &[LaunchRecord],
    success_outcomes: &[&str],
) -> SiteSuccessSummary {
    let mut summary = SiteSuccessSummary::new();
    for record in records {
        if record.is_success(success_outcomes) {
            *summary.entry(record.launch_site.clone()).or_insert(0) += 1;
        }
    }
    summary
}

/// Count launches per (site, outcome) pair.
pub fn outcome_matrix(records: &[LaunchRecord]) -> SiteOutcomeMatrix {
    let mut matrix = SiteOutcomeMatrix::new();
    for record in records {
        *matrix
            .entry(record.launch_site.clone())
            .or_default()
            .entry(record.mission_outcome.clone())
            .or_insert(0) += 1;
    }
    matrix
}
