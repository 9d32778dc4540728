use std::sync::Arc;

use crate::core::error::Result;
use crate::features::filter::dtos::FilterQuery;
use crate::features::filter::models::{FilterSelection, SelectionDepth};
use crate::features::regions::models::{District, Province, Regency};
use crate::features::regions::services::{RegionDataset, RegionDatasetService};
use crate::modules::storage::KvStore;
use crate::shared::constants::FILTER_STORE_KEY;

/// Outcome of one resolution pass: the selected entities and the
/// candidate lists narrowed to them.
#[derive(Debug, Clone)]
pub struct ResolvedFilter {
    pub provinces: Vec<Province>,
    pub filtered_regencies: Vec<Regency>,
    pub filtered_districts: Vec<District>,
    pub selected_province: Option<Province>,
    pub selected_regency: Option<Regency>,
    pub selected_district: Option<District>,
}

impl ResolvedFilter {
    pub fn depth(&self) -> SelectionDepth {
        match (
            &self.selected_province,
            &self.selected_regency,
            &self.selected_district,
        ) {
            (None, _, _) => SelectionDepth::Empty,
            (Some(_), None, _) => SelectionDepth::ProvinceOnly,
            (Some(_), Some(_), None) => SelectionDepth::ProvinceAndRegency,
            (Some(_), Some(_), Some(_)) => SelectionDepth::Full,
        }
    }
}

/// Resolves the filter state for one page request.
///
/// Precedence per level is query parameter over persisted value; the
/// merged raw triple is written back to the store after every resolution,
/// stale identifiers included.
pub struct FilterService {
    dataset: Arc<RegionDatasetService>,
    store: Arc<dyn KvStore>,
}

impl FilterService {
    pub fn new(dataset: Arc<RegionDatasetService>, store: Arc<dyn KvStore>) -> Self {
        Self { dataset, store }
    }

    /// Full resolution pass: load the dataset, merge query and persisted
    /// values, resolve selections, persist the merged snapshot.
    pub async fn resolve(&self, query: &FilterQuery) -> Result<ResolvedFilter> {
        let dataset = self.dataset.load().await?;

        let persisted = self.persisted_selection();
        let merged = merge_selection(query, &persisted);
        let resolved = resolve_selection(&dataset, &merged);

        // The snapshot is written back verbatim, even when it was sourced
        // entirely from the store or holds an identifier that matched
        // nothing. A once-stale value only clears on explicit reset.
        self.store
            .set(FILTER_STORE_KEY, serde_json::to_value(&merged)?)?;

        Ok(resolved)
    }

    /// Drop the persisted snapshot (the reset button).
    pub fn clear_persisted(&self) -> Result<()> {
        self.store.remove(FILTER_STORE_KEY)
    }

    fn persisted_selection(&self) -> FilterSelection {
        // An absent or unparseable snapshot reads as the empty filter.
        self.store
            .get(FILTER_STORE_KEY)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }
}

/// Query parameter wins per level; an absent or empty value falls back to
/// the persisted one.
fn merge_selection(query: &FilterQuery, persisted: &FilterSelection) -> FilterSelection {
    FilterSelection {
        province_id: pick(query.province.as_deref(), persisted.province_id.as_deref()),
        regency_id: pick(query.regency.as_deref(), persisted.regency_id.as_deref()),
        district_id: pick(query.district.as_deref(), persisted.district_id.as_deref()),
    }
}

fn pick(query: Option<&str>, persisted: Option<&str>) -> Option<String> {
    query
        .filter(|v| !v.is_empty())
        .or_else(|| persisted.filter(|v| !v.is_empty()))
        .map(str::to_owned)
}

/// Identifier coercion fails closed: a non-numeric value reads as "no
/// selection at this level", never an error.
fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
}

/// Resolve the raw selection against the dataset.
///
/// Each level only matches within the candidates narrowed by its parent,
/// so a lookup miss at one level unselects every level below it no matter
/// what the descendant values say.
fn resolve_selection(dataset: &RegionDataset, selection: &FilterSelection) -> ResolvedFilter {
    let selected_province = parse_id(selection.province_id.as_deref())
        .and_then(|id| dataset.find_province(id))
        .cloned();

    let filtered_regencies = selected_province
        .as_ref()
        .map(|p| dataset.regencies_of(p.id))
        .unwrap_or_default();

    let selected_regency = parse_id(selection.regency_id.as_deref())
        .and_then(|id| filtered_regencies.iter().find(|r| r.id == id))
        .cloned();

    let filtered_districts = selected_regency
        .as_ref()
        .map(|r| dataset.districts_of(r.id))
        .unwrap_or_default();

    let selected_district = parse_id(selection.district_id.as_deref())
        .and_then(|id| filtered_districts.iter().find(|d| d.id == id))
        .cloned();

    ResolvedFilter {
        provinces: dataset.provinces.clone(),
        filtered_regencies,
        filtered_districts,
        selected_province,
        selected_regency,
        selected_district,
    }
}
