//! Translates dropdown changes into root-route query parameters.
//!
//! Each dropdown submits its own GET form against `/`. A form carries
//! hidden inputs for the ancestors of the level it changes and nothing
//! below it, so selecting a parent drops every descendant parameter
//! (cascade invalidation) and every change lands as a fresh navigation.

use crate::features::filter::models::SelectionDepth;
use crate::features::filter::services::ResolvedFilter;

/// The cascade level a dropdown changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterLevel {
    Province,
    Regency,
    District,
}

/// Parameters for the first `depth` levels of the current selection path.
pub fn selection_params(
    resolved: &ResolvedFilter,
    depth: SelectionDepth,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if depth == SelectionDepth::Empty {
        return params;
    }
    if let Some(province) = &resolved.selected_province {
        params.push(("province", province.id.to_string()));
    }

    if depth == SelectionDepth::ProvinceOnly {
        return params;
    }
    if let Some(regency) = &resolved.selected_regency {
        params.push(("regency", regency.id.to_string()));
    }

    if depth == SelectionDepth::ProvinceAndRegency {
        return params;
    }
    if let Some(district) = &resolved.selected_district {
        params.push(("district", district.id.to_string()));
    }

    params
}

/// Parameters a change at `level` keeps from the current state: the
/// ancestors of that level, never its descendants.
pub fn carried_params(resolved: &ResolvedFilter, level: FilterLevel) -> Vec<(&'static str, String)> {
    let parent_depth = match level {
        FilterLevel::Province => SelectionDepth::Empty,
        FilterLevel::Regency => SelectionDepth::ProvinceOnly,
        FilterLevel::District => SelectionDepth::ProvinceAndRegency,
    };
    selection_params(resolved, parent_depth)
}

/// Encode parameters as a query string, empty for no parameters.
pub fn query_string(params: &[(&'static str, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }

    let encoded: Vec<String> = params
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect();
    format!("?{}", encoded.join("&"))
}

/// Href navigating to the first `depth` levels of the selection path.
pub fn breadcrumb_href(resolved: &ResolvedFilter, depth: SelectionDepth) -> String {
    format!("/{}", query_string(&selection_params(resolved, depth)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::resolved_full;

    #[test]
    fn test_province_change_carries_nothing() {
        let resolved = resolved_full();
        assert!(carried_params(&resolved, FilterLevel::Province).is_empty());
    }

    #[test]
    fn test_regency_change_carries_only_the_province() {
        let resolved = resolved_full();
        let params = carried_params(&resolved, FilterLevel::Regency);
        assert_eq!(params, vec![("province", "11".to_string())]);
    }

    #[test]
    fn test_district_change_carries_province_and_regency() {
        let resolved = resolved_full();
        let params = carried_params(&resolved, FilterLevel::District);
        assert_eq!(
            params,
            vec![
                ("province", "11".to_string()),
                ("regency", "1101".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_string_is_empty_without_params() {
        assert_eq!(query_string(&[]), "");
    }

    #[test]
    fn test_breadcrumb_hrefs_walk_the_selection_path() {
        let resolved = resolved_full();

        assert_eq!(breadcrumb_href(&resolved, SelectionDepth::Empty), "/");
        assert_eq!(
            breadcrumb_href(&resolved, SelectionDepth::ProvinceOnly),
            "/?province=11"
        );
        assert_eq!(
            breadcrumb_href(&resolved, SelectionDepth::ProvinceAndRegency),
            "/?province=11&regency=1101"
        );
        assert_eq!(
            breadcrumb_href(&resolved, SelectionDepth::Full),
            "/?province=11&regency=1101&district=110101"
        );
    }
}
