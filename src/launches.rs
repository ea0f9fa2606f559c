//! Launch-records dataset loading.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Column headers the dataset must carry, matched exactly.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Mission Outcome",
    "Payload Mass (kg)",
    "Booster Version",
];

/// Mission outcomes that count as a successful launch.
pub const SUCCESS_OUTCOMES: &[&str] = &["Success", "Success (payload status unclear)"];

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read launch data {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("missing required column {name:?}")]
    MissingColumn { name: &'static str },
    #[error("invalid launch record: {0}")]
    InvalidRecord(String),
    #[error("payload mass out of range on line {line}: {value}")]
    InvalidPayload { line: usize, value: f64 },
    #[error("dataset contains no launch records")]
    Empty,
}

/// One launch, as recorded in the source dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchRecord {
    /// Site the booster launched from.
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Recorded outcome string, one of a fixed set of success and failure variants.
    #[serde(rename = "Mission Outcome")]
    pub mission_outcome: String,
    /// Payload mass in kilograms. Non-negative and finite.
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Booster version flown.
    #[serde(rename = "Booster Version")]
    pub booster_version: String,
}

impl LaunchRecord {
    /// True when the recorded outcome is in the given success set.
    pub fn is_success(&self, success_outcomes: &[&str]) -> bool {
        success_outcomes.contains(&self.mission_outcome.as_str())
    }
}

/// Global payload-mass extremes over a launch table.
///
/// These anchor the payload range selector, so they are computed once at load
/// time rather than per interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    /// Smallest payload mass in the table, in kilograms.
    pub min_kg: f64,
    /// Largest payload mass in the table, in kilograms.
    pub max_kg: f64,
}

impl PayloadBounds {
    /// Extremes over the given records, or `None` for an empty table.
    pub fn of(records: &[LaunchRecord]) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for record in records {
            let mass = record.payload_mass_kg;
            bounds = Some(match bounds {
                None => Self {
                    min_kg: mass,
                    max_kg: mass,
                },
                Some(current) => Self {
                    min_kg: current.min_kg.min(mass),
                    max_kg: current.max_kg.max(mass),
                },
            });
        }
        bounds
    }
}

/// Fully loaded launch table plus its payload extremes.
#[derive(Debug, Clone)]
pub struct LoadedLaunches {
    /// Launch records in source order.
    pub records: Vec<LaunchRecord>,
    /// Global payload-mass extremes over `records`.
    pub payload_bounds: PayloadBounds,
}

/// Load the launch table from a CSV file.
///
/// Columns beyond [`REQUIRED_COLUMNS`] are ignored. A headers-only file is an
/// error since the payload extremes would be undefined.
pub fn load_table(path: &Path) -> Result<LoadedLaunches, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|err| DataLoadError::InvalidRecord(err.to_string()))?
        .clone();
    for name in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == name) {
            return Err(DataLoadError::MissingColumn { name });
        }
    }

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<LaunchRecord>().enumerate() {
        let line = idx + 2;
        let record =
            row.map_err(|err| DataLoadError::InvalidRecord(format!("line {line}: {err}")))?;
        if !record.payload_mass_kg.is_finite() || record.payload_mass_kg < 0.0 {
            return Err(DataLoadError::InvalidPayload {
                line,
                value: record.payload_mass_kg,
            });
        }
        records.push(record);
    }

    let payload_bounds = PayloadBounds::of(&records).ok_or(DataLoadError::Empty)?;
    Ok(LoadedLaunches {
        records,
        payload_bounds,
    })
}
