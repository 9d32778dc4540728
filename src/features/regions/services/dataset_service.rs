use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{District, Province, Regency};

/// The hierarchical region dataset, parsed into its three ordered levels.
///
/// Sequences keep dataset order; no sorting happens on top of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionDataset {
    pub provinces: Vec<Province>,
    pub regencies: Vec<Regency>,
    pub districts: Vec<District>,
}

impl RegionDataset {
    pub fn find_province(&self, id: i64) -> Option<&Province> {
        self.provinces.iter().find(|p| p.id == id)
    }

    /// Regencies belonging to one province, in dataset order.
    pub fn regencies_of(&self, province_id: i64) -> Vec<Regency> {
        self.regencies
            .iter()
            .filter(|r| r.province_id == province_id)
            .cloned()
            .collect()
    }

    /// Districts belonging to one regency, in dataset order.
    pub fn districts_of(&self, regency_id: i64) -> Vec<District> {
        self.districts
            .iter()
            .filter(|d| d.regency_id == regency_id)
            .cloned()
            .collect()
    }
}

/// Service reading the static region dataset from disk.
pub struct RegionDatasetService {
    path: PathBuf,
}

impl RegionDatasetService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the dataset, fresh on every call.
    ///
    /// Each page visit re-reads the resource; there is no cache to
    /// invalidate. An unreachable or malformed file propagates as a load
    /// error, without retry.
    pub async fn load(&self) -> Result<RegionDataset> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::DatasetUnavailable(format!(
                "Failed to read region dataset {}: {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::DatasetMalformed(format!(
                "Failed to parse region dataset {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}
