//! Loading and indexing of the bin collection reference dataset.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::model::DistrictRecord;

#[derive(thiserror::Error, Debug)]
/// Errors raised while loading the reference dataset. All of them are fatal
/// at startup; the process must not serve queries from partial data.
pub enum DataLoadError {
    /// Dataset file is missing or unreadable.
    #[error("Failed to read dataset at {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: String,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
    /// Dataset is not the expected JSON document.
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two records share the same case-folded district code.
    #[error("Duplicate postcode district in dataset: {code}")]
    DuplicateDistrict {
        /// The offending normalized code.
        code: String,
    },
    /// Dataset parsed fine but contains no districts at all.
    #[error("Dataset contains no districts")]
    NoDistricts,
}

/// Top-level shape of the dataset document.
#[derive(Debug, Deserialize)]
struct Dataset {
    districts: Vec<DistrictRecord>,
}

/// Immutable index over the district reference data.
///
/// Built once at startup; every later access is read-only, so the store can
/// be shared across any number of concurrent callers without locking.
#[derive(Debug)]
pub struct ScheduleStore {
    records: Vec<DistrictRecord>,
    by_code: HashMap<String, usize>,
    sorted_codes: Vec<String>,
}

impl ScheduleStore {
    /// Load the dataset from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns a [`DataLoadError`] when the file cannot be read or its
    /// contents are rejected by [`ScheduleStore::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DataLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse and index a dataset document.
    ///
    /// Duplicate district codes (after case folding) are rejected rather
    /// than overwritten, so a broken dataset fails loud at startup.
    ///
    /// # Errors
    ///
    /// Returns a [`DataLoadError`] when the document is malformed, empty,
    /// or violates the unique-code invariant.
    pub fn from_json(raw: &str) -> Result<Self, DataLoadError> {
        let dataset: Dataset = serde_json::from_str(raw)?;
        if dataset.districts.is_empty() {
            return Err(DataLoadError::NoDistricts);
        }

        let mut by_code = HashMap::with_capacity(dataset.districts.len());
        for (index, record) in dataset.districts.iter().enumerate() {
            let code = record.normalized_code();
            if by_code.insert(code.clone(), index).is_some() {
                return Err(DataLoadError::DuplicateDistrict { code });
            }
        }

        let mut sorted_codes: Vec<String> = by_code.keys().cloned().collect();
        sorted_codes.sort();

        Ok(Self {
            records: dataset.districts,
            by_code,
            sorted_codes,
        })
    }

    /// Exact lookup by district code, case-insensitive.
    #[must_use]
    pub fn lookup_by_district(&self, code: &str) -> Option<&DistrictRecord> {
        self.by_code
            .get(&code.to_uppercase())
            .and_then(|&index| self.records.get(index))
    }

    /// All supported district codes, case-folded and sorted. Stable across
    /// calls; computed once at load.
    #[must_use]
    pub fn all_district_codes(&self) -> &[String] {
        &self.sorted_codes
    }

    /// Records in dataset order, for the resolver's area-name scan.
    #[must_use]
    pub fn records(&self) -> &[DistrictRecord] {
        &self.records
    }
}
