use serde::{Deserialize, Serialize};

/// Raw filter selection, ids as the string-encoded values they carry in
/// the query string.
///
/// This is also the persisted snapshot shape. Values are kept raw on
/// purpose: a stale or malformed identifier is persisted as-is and only
/// fails closed at lookup time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSelection {
    pub province_id: Option<String>,
    pub regency_id: Option<String>,
    pub district_id: Option<String>,
}

/// Which levels of the cascade currently resolve to a dataset record.
///
/// Transitions are driven solely by which identifiers resolve; the view
/// renders each state declaratively from the resolved entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionDepth {
    Empty,
    ProvinceOnly,
    ProvinceAndRegency,
    Full,
}
