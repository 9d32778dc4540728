#[cfg(test)]
use std::path::PathBuf;

#[cfg(test)]
use crate::features::filter::services::ResolvedFilter;
#[cfg(test)]
use crate::features::regions::models::{District, Province, Regency};
#[cfg(test)]
use crate::features::regions::services::RegionDataset;

#[cfg(test)]
fn province(id: i64, name: &str) -> Province {
    Province {
        id,
        name: name.to_string(),
    }
}

#[cfg(test)]
fn regency(id: i64, name: &str, province_id: i64) -> Regency {
    Regency {
        id,
        name: name.to_string(),
        province_id,
    }
}

#[cfg(test)]
fn district(id: i64, name: &str, regency_id: i64) -> District {
    District {
        id,
        name: name.to_string(),
        regency_id,
    }
}

/// Small but realistic slice of the region hierarchy, enough to exercise
/// every cascade path.
#[cfg(test)]
pub fn sample_dataset() -> RegionDataset {
    RegionDataset {
        provinces: vec![
            province(11, "Aceh"),
            province(12, "Sumatera Utara"),
            province(31, "DKI Jakarta"),
        ],
        regencies: vec![
            regency(1101, "Kab. Aceh Selatan", 11),
            regency(1171, "Kota Banda Aceh", 11),
            regency(1275, "Kota Medan", 12),
            regency(3173, "Kota Jakarta Pusat", 31),
        ],
        districts: vec![
            district(110101, "Bakongan", 1101),
            district(110102, "Kluet Utara", 1101),
            district(117101, "Baiturrahman", 1171),
            district(317301, "Gambir", 3173),
        ],
    }
}

/// Write a dataset to a unique temp file; callers remove it when done.
#[cfg(test)]
pub fn write_dataset_file(dataset: &RegionDataset) -> PathBuf {
    let path = std::env::temp_dir().join(format!("regions-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, serde_json::to_string_pretty(dataset).unwrap()).unwrap();
    path
}

/// Resolved state with nothing selected.
#[cfg(test)]
pub fn resolved_empty() -> ResolvedFilter {
    let dataset = sample_dataset();
    ResolvedFilter {
        provinces: dataset.provinces.clone(),
        filtered_regencies: Vec::new(),
        filtered_districts: Vec::new(),
        selected_province: None,
        selected_regency: None,
        selected_district: None,
    }
}

/// Resolved state selecting Aceh / Kab. Aceh Selatan / Bakongan.
#[cfg(test)]
pub fn resolved_full() -> ResolvedFilter {
    let dataset = sample_dataset();
    let filtered_regencies = dataset.regencies_of(11);
    let filtered_districts = dataset.districts_of(1101);

    ResolvedFilter {
        selected_province: dataset.find_province(11).cloned(),
        selected_regency: filtered_regencies.iter().find(|r| r.id == 1101).cloned(),
        selected_district: filtered_districts.iter().find(|d| d.id == 110101).cloned(),
        provinces: dataset.provinces.clone(),
        filtered_regencies,
        filtered_districts,
    }
}
