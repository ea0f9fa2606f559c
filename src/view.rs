//! Pure resolvers mapping selector state to chart datasets.
//!
//! This module keeps the chart math pure and testable so the presentation
//! integration stays small: every resolver is a deterministic function of its
//! arguments, and repeated calls with identical selector state yield identical
//! chart data.

use serde::Serialize;
use thiserror::Error;

use crate::launches::LaunchRecord;
use crate::summary::{SiteOutcomeMatrix, SiteSuccessSummary};

/// Site restriction chosen in the site selector.
///
/// The presentation layer's `"All"` dropdown entry maps to [`SiteFilter::All`];
/// the core never matches on a sentinel string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteFilter {
    /// No site restriction.
    All,
    /// Restrict to launches from one named site.
    Site(String),
}

impl SiteFilter {
    /// True when a record from `site` passes this filter.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(selected) => selected == site,
        }
    }
}

/// Inclusive payload-mass bounds chosen in the range selector, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    min_kg: f64,
    max_kg: f64,
}

impl PayloadRange {
    /// Create a range, ordering the bounds so `min` is never above `max`.
    pub fn new(min_kg: f64, max_kg: f64) -> Self {
        if min_kg <= max_kg {
            Self { min_kg, max_kg }
        } else {
            Self {
                min_kg: max_kg,
                max_kg: min_kg,
            }
        }
    }

    /// Lower bound in kilograms.
    pub fn min_kg(&self) -> f64 {
        self.min_kg
    }

    /// Upper bound in kilograms.
    pub fn max_kg(&self) -> f64 {
        self.max_kg
    }

    /// True when `mass_kg` lies within the inclusive bounds.
    pub fn contains(&self, mass_kg: f64) -> bool {
        mass_kg >= self.min_kg && mass_kg <= self.max_kg
    }
}

/// Selector values driving both charts, passed by value on each change.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorState {
    /// Current site selector value.
    pub site: SiteFilter,
    /// Current payload range selector value.
    pub payload: PayloadRange,
}

/// One labeled pie slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieSlice<'a> {
    /// Slice label: a site name for the all-sites view, an outcome otherwise.
    pub label: &'a str,
    /// Launch count behind the slice.
    pub value: u64,
}

/// One scatter point: payload mass against launch site, colored by booster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint<'a> {
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    /// Site the launch flew from.
    pub launch_site: &'a str,
    /// Booster version flown.
    pub booster_version: &'a str,
}

/// A named site has no recorded launches.
///
/// Callers render an empty chart on this; it is never surfaced to the end
/// user as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no launch records for site {site:?}")]
pub struct SiteNotFound {
    /// The site name that had no rows in the outcome matrix.
    pub site: String,
}

/// Resolve the pie chart for the current site filter.
///
/// With [`SiteFilter::All`] the slices are per-site success counts; sites
/// absent from the summary contribute no slice. With a named site the slices
/// are that site's outcome breakdown.
pub fn resolve_pie<'a>(
    filter: &SiteFilter,
    summary: &'a SiteSuccessSummary,
    matrix: &'a SiteOutcomeMatrix,
) -> Result<Vec<PieSlice<'a>>, SiteNotFound> {
    match filter {
        SiteFilter::All => Ok(summary
            .iter()
            .map(|(site, count)| PieSlice {
                label: site.as_str(),
                value: *count,
            })
            .collect()),
        SiteFilter::Site(site) => {
            let outcomes = matrix.get(site).ok_or_else(|| SiteNotFound {
                site: site.clone(),
            })?;
            Ok(outcomes
                .iter()
                .map(|(outcome, count)| PieSlice {
                    label: outcome.as_str(),
                    value: *count,
                })
                .collect())
        }
    }
}

/// Resolve the payload/site scatter data for the current selector state.
///
/// Keeps source order; an empty result is a valid (empty) chart.
pub fn resolve_scatter<'a>(
    filter: &SiteFilter,
    range: PayloadRange,
    records: &'a [LaunchRecord],
) -> Vec<ScatterPoint<'a>> {
    records
        .iter()
        .filter(|record| range.contains(record.payload_mass_kg))
        .filter(|record| filter.matches(&record.launch_site))
        .map(|record| ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            launch_site: record.launch_site.as_str(),
            booster_version: record.booster_version.as_str(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launches::SUCCESS_OUTCOMES;
    use crate::summary::{outcome_matrix, success_summary};

    fn record(site: &str, outcome: &str, mass: f64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            mission_outcome: outcome.to_string(),
            payload_mass_kg: mass,
            booster_version: booster.to_string(),
        }
    }

    fn scenario_table() -> Vec<LaunchRecord> {
        vec![
            record("SiteA", "Success", 500.0, "v1"),
            record("SiteA", "Failure", 800.0, "v1"),
            record("SiteB", "Success", 300.0, "v2"),
        ]
    }

    #[test]
    fn all_sites_pie_uses_success_counts() {
        let table = scenario_table();
        let summary = success_summary(&table, SUCCESS_OUTCOMES);
        let matrix = outcome_matrix(&table);

        let slices = resolve_pie(&SiteFilter::All, &summary, &matrix).unwrap();
        assert_eq!(
            slices,
            vec![
                PieSlice {
                    label: "SiteA",
                    value: 1
                },
                PieSlice {
                    label: "SiteB",
                    value: 1
                },
            ]
        );
    }

    #[test]
    fn all_sites_pie_sums_to_total_success_count() {
        let table = scenario_table();
        let summary = success_summary(&table, SUCCESS_OUTCOMES);
        let matrix = outcome_matrix(&table);

        let slices = resolve_pie(&SiteFilter::All, &summary, &matrix).unwrap();
        let total: u64 = slices.iter().map(|slice| slice.value).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn single_site_pie_breaks_down_outcomes() {
        let table = scenario_table();
        let summary = success_summary(&table, SUCCESS_OUTCOMES);
        let matrix = outcome_matrix(&table);

        let slices =
            resolve_pie(&SiteFilter::Site("SiteA".into()), &summary, &matrix).unwrap();
        assert_eq!(slices.len(), 2);
        assert!(slices.contains(&PieSlice {
            label: "Success",
            value: 1
        }));
        assert!(slices.contains(&PieSlice {
            label: "Failure",
            value: 1
        }));
    }

    #[test]
    fn unknown_site_pie_reports_site_not_found() {
        let table = scenario_table();
        let summary = success_summary(&table, SUCCESS_OUTCOMES);
        let matrix = outcome_matrix(&table);

        let err =
            resolve_pie(&SiteFilter::Site("SiteZ".into()), &summary, &matrix).unwrap_err();
        assert_eq!(err.site, "SiteZ");
    }

    #[test]
    fn scatter_keeps_all_rows_within_full_range() {
        let table = scenario_table();
        let points = resolve_scatter(&SiteFilter::All, PayloadRange::new(0.0, 1000.0), &table);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].launch_site, "SiteA");
        assert_eq!(points[2].booster_version, "v2");
    }

    #[test]
    fn scatter_filters_by_site_and_range() {
        let table = scenario_table();
        let points = resolve_scatter(
            &SiteFilter::Site("SiteA".into()),
            PayloadRange::new(0.0, 600.0),
            &table,
        );
        assert_eq!(
            points,
            vec![ScatterPoint {
                payload_mass_kg: 500.0,
                launch_site: "SiteA",
                booster_version: "v1",
            }]
        );
    }

    #[test]
    fn scatter_range_bounds_are_inclusive() {
        let table = scenario_table();
        let points = resolve_scatter(&SiteFilter::All, PayloadRange::new(300.0, 500.0), &table);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn empty_scatter_is_valid_output() {
        let table = scenario_table();
        let points = resolve_scatter(&SiteFilter::All, PayloadRange::new(10_000.0, 20_000.0), &table);
        assert!(points.is_empty());
    }

    #[test]
    fn inverted_range_bounds_are_reordered() {
        let range = PayloadRange::new(900.0, 100.0);
        assert_eq!(range.min_kg(), 100.0);
        assert_eq!(range.max_kg(), 900.0);
        assert!(range.contains(500.0));
    }

    #[test]
    fn resolvers_are_idempotent_for_identical_state() {
        let table = scenario_table();
        let summary = success_summary(&table, SUCCESS_OUTCOMES);
        let matrix = outcome_matrix(&table);
        let state = SelectorState {
            site: SiteFilter::Site("SiteA".into()),
            payload: PayloadRange::new(0.0, 1000.0),
        };

        let first_pie = resolve_pie(&state.site, &summary, &matrix).unwrap();
        let second_pie = resolve_pie(&state.site, &summary, &matrix).unwrap();
        assert_eq!(first_pie, second_pie);

        let first_scatter = resolve_scatter(&state.site, state.payload, &table);
        let second_scatter = resolve_scatter(&state.site, state.payload, &table);
        assert_eq!(first_scatter, second_scatter);
    }

    #[test]
    fn chart_data_serializes_for_the_renderer() {
        let slice = PieSlice {
            label: "SiteA",
            value: 3,
        };
        let json = serde_json::to_string(&slice).unwrap();
        assert_eq!(json, r#"{"label":"SiteA","value":3}"#);

        let point = ScatterPoint {
            payload_mass_kg: 500.0,
            launch_site: "SiteA",
            booster_version: "v1",
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains(r#""launch_site":"SiteA""#));
    }
}
