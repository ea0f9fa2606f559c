//! Process-lifetime dashboard state.
//!
//! [`DashboardContext`] owns the immutable launch table and the summaries
//! derived from it. It is built once at startup and passed explicitly to
//! whatever drives the charts; nothing here mutates after load, so the
//! context can be shared read-only across every interaction.

use std::path::Path;

use crate::launches::{
    self, DataLoadError, LaunchRecord, PayloadBounds, SUCCESS_OUTCOMES,
};
use crate::summary::{self, SiteOutcomeMatrix, SiteSuccessSummary};
use crate::view::{self, PayloadRange, PieSlice, ScatterPoint, SiteFilter, SiteNotFound};

/// Immutable launch table plus cached aggregate views.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    records: Vec<LaunchRecord>,
    payload_bounds: PayloadBounds,
    success_summary: SiteSuccessSummary,
    outcome_matrix: SiteOutcomeMatrix,
}

impl DashboardContext {
    /// Load the dataset from `path` and precompute both summaries.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let loaded = launches::load_table(path)?;
        tracing::info!(
            "Loaded {} launch records from {} (payload {:.0}-{:.0} kg)",
            loaded.records.len(),
            path.display(),
            loaded.payload_bounds.min_kg,
            loaded.payload_bounds.max_kg,
        );
        Self::from_records(loaded.records)
    }

    /// Build a context from records already in memory.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DataLoadError> {
        let payload_bounds = PayloadBounds::of(&records).ok_or(DataLoadError::Empty)?;
        let success_summary = summary::success_summary(&records, SUCCESS_OUTCOMES);
        let outcome_matrix = summary::outcome_matrix(&records);
        Ok(Self {
            records,
            payload_bounds,
            success_summary,
            outcome_matrix,
        })
    }

    /// Launch records in source order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Global payload extremes, anchoring the range selector.
    pub fn payload_bounds(&self) -> PayloadBounds {
        self.payload_bounds
    }

    /// Cached per-site success counts.
    pub fn success_summary(&self) -> &SiteSuccessSummary {
        &self.success_summary
    }

    /// Cached per-(site, outcome) counts.
    pub fn outcome_matrix(&self) -> &SiteOutcomeMatrix {
        &self.outcome_matrix
    }

    /// Distinct launch sites in first-appearance order, for the site selector.
    ///
    /// The presentation layer prepends its own "All" entry; the core models
    /// that choice as [`SiteFilter::All`].
    pub fn site_options(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in &self.records {
            if !sites.contains(&record.launch_site.as_str()) {
                sites.push(record.launch_site.as_str());
            }
        }
        sites
    }

    /// Resolve the pie chart for the given site filter from the cached summaries.
    pub fn pie_view(&self, filter: &SiteFilter) -> Result<Vec<PieSlice<'_>>, SiteNotFound> {
        view::resolve_pie(filter, &self.success_summary, &self.outcome_matrix)
    }

    /// Resolve the scatter data for the given selector values.
    pub fn scatter_view(&self, filter: &SiteFilter, range: PayloadRange) -> Vec<ScatterPoint<'_>> {
        view::resolve_scatter(filter, range, &self.records)
    }
}
