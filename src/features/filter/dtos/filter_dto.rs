use serde::{Deserialize, Serialize};

use crate::features::filter::models::SelectionDepth;
use crate::features::filter::services::navigation::{self, FilterLevel};
use crate::features::filter::services::ResolvedFilter;
use crate::shared::constants::BREADCRUMB_ROOT_LABEL;

/// Query parameters of the filter page; each a string-encoded integer id,
/// absent meaning "unset at this level".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    pub province: Option<String>,
    pub regency: Option<String>,
    pub district: Option<String>,
}

/// One `<option>` of a dropdown
#[derive(Debug, Clone, Serialize)]
pub struct OptionDto {
    pub id: i64,
    pub name: String,
    pub selected: bool,
}

/// A hidden form input carrying an ancestor selection
#[derive(Debug, Clone, Serialize)]
pub struct HiddenParamDto {
    pub name: &'static str,
    pub value: String,
}

/// One breadcrumb entry; `active` marks the deepest resolved level
#[derive(Debug, Clone, Serialize)]
pub struct BreadcrumbItemDto {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// One level of the hero panel
#[derive(Debug, Clone, Serialize)]
pub struct HeroLevelDto {
    pub label: &'static str,
    pub name: String,
}

/// Template context for the filter page, built from one resolved state.
#[derive(Debug, Clone, Serialize)]
pub struct FilterPageDto {
    pub provinces: Vec<OptionDto>,
    pub regencies: Vec<OptionDto>,
    pub districts: Vec<OptionDto>,
    pub regency_enabled: bool,
    pub district_enabled: bool,
    pub regency_carried: Vec<HiddenParamDto>,
    pub district_carried: Vec<HiddenParamDto>,
    pub breadcrumb: Vec<BreadcrumbItemDto>,
    pub hero_levels: Vec<HeroLevelDto>,
    pub headline: Option<String>,
    pub depth: SelectionDepth,
}

const HERO_LABEL_PROVINCE: &str = "PROVINSI";
const HERO_LABEL_REGENCY: &str = "KOTA / KABUPATEN";
const HERO_LABEL_DISTRICT: &str = "KECAMATAN";

impl From<&ResolvedFilter> for FilterPageDto {
    fn from(resolved: &ResolvedFilter) -> Self {
        let depth = resolved.depth();

        let provinces = options(
            &resolved.provinces,
            resolved.selected_province.as_ref().map(|p| p.id),
            |p| (p.id, p.name.clone()),
        );
        let regencies = options(
            &resolved.filtered_regencies,
            resolved.selected_regency.as_ref().map(|r| r.id),
            |r| (r.id, r.name.clone()),
        );
        let districts = options(
            &resolved.filtered_districts,
            resolved.selected_district.as_ref().map(|d| d.id),
            |d| (d.id, d.name.clone()),
        );

        let mut breadcrumb = vec![BreadcrumbItemDto {
            label: BREADCRUMB_ROOT_LABEL.to_string(),
            href: navigation::breadcrumb_href(resolved, SelectionDepth::Empty),
            active: depth == SelectionDepth::Empty,
        }];
        if let Some(province) = &resolved.selected_province {
            breadcrumb.push(BreadcrumbItemDto {
                label: province.name.clone(),
                href: navigation::breadcrumb_href(resolved, SelectionDepth::ProvinceOnly),
                active: depth == SelectionDepth::ProvinceOnly,
            });
        }
        if let Some(regency) = &resolved.selected_regency {
            breadcrumb.push(BreadcrumbItemDto {
                label: regency.name.clone(),
                href: navigation::breadcrumb_href(resolved, SelectionDepth::ProvinceAndRegency),
                active: depth == SelectionDepth::ProvinceAndRegency,
            });
        }
        if let Some(district) = &resolved.selected_district {
            breadcrumb.push(BreadcrumbItemDto {
                label: district.name.clone(),
                href: navigation::breadcrumb_href(resolved, SelectionDepth::Full),
                active: depth == SelectionDepth::Full,
            });
        }

        let mut hero_levels = Vec::new();
        if let Some(province) = &resolved.selected_province {
            hero_levels.push(HeroLevelDto {
                label: HERO_LABEL_PROVINCE,
                name: province.name.clone(),
            });
        }
        if let Some(regency) = &resolved.selected_regency {
            hero_levels.push(HeroLevelDto {
                label: HERO_LABEL_REGENCY,
                name: regency.name.clone(),
            });
        }
        if let Some(district) = &resolved.selected_district {
            hero_levels.push(HeroLevelDto {
                label: HERO_LABEL_DISTRICT,
                name: district.name.clone(),
            });
        }

        let headline = hero_levels.last().map(|level| level.name.clone());

        Self {
            provinces,
            regencies,
            districts,
            regency_enabled: resolved.selected_province.is_some(),
            district_enabled: resolved.selected_regency.is_some(),
            regency_carried: hidden_params(navigation::carried_params(
                resolved,
                FilterLevel::Regency,
            )),
            district_carried: hidden_params(navigation::carried_params(
                resolved,
                FilterLevel::District,
            )),
            breadcrumb,
            hero_levels,
            headline,
            depth,
        }
    }
}

fn options<T>(
    items: &[T],
    selected_id: Option<i64>,
    parts: impl Fn(&T) -> (i64, String),
) -> Vec<OptionDto> {
    items
        .iter()
        .map(|item| {
            let (id, name) = parts(item);
            OptionDto {
                id,
                name,
                selected: selected_id == Some(id),
            }
        })
        .collect()
}

fn hidden_params(params: Vec<(&'static str, String)>) -> Vec<HiddenParamDto> {
    params
        .into_iter()
        .map(|(name, value)| HiddenParamDto { name, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{resolved_empty, resolved_full};

    #[test]
    fn test_breadcrumb_covers_resolved_levels_and_highlights_deepest() {
        let page = FilterPageDto::from(&resolved_full());

        let labels: Vec<&str> = page.breadcrumb.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Indonesia", "Aceh", "Kab. Aceh Selatan", "Bakongan"]
        );

        let active: Vec<bool> = page.breadcrumb.iter().map(|i| i.active).collect();
        assert_eq!(active, vec![false, false, false, true]);
    }

    #[test]
    fn test_headline_is_the_deepest_selected_name() {
        let page = FilterPageDto::from(&resolved_full());
        assert_eq!(page.headline.as_deref(), Some("Bakongan"));
        assert_eq!(page.depth, SelectionDepth::Full);
    }

    #[test]
    fn test_empty_state_renders_root_only() {
        let page = FilterPageDto::from(&resolved_empty());

        assert_eq!(page.breadcrumb.len(), 1);
        assert!(page.breadcrumb[0].active);
        assert!(page.hero_levels.is_empty());
        assert!(page.headline.is_none());
        assert!(!page.regency_enabled);
        assert!(!page.district_enabled);
        assert!(page.regency_carried.is_empty());
    }

    #[test]
    fn test_selected_option_is_marked() {
        let page = FilterPageDto::from(&resolved_full());

        let selected: Vec<i64> = page
            .provinces
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.id)
            .collect();
        assert_eq!(selected, vec![11]);

        let selected: Vec<i64> = page
            .regencies
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.id)
            .collect();
        assert_eq!(selected, vec![1101]);
    }
}
