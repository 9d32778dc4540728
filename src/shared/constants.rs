/// Store key holding the last filter selection snapshot
pub const FILTER_STORE_KEY: &str = "region_filters";

/// Label heading the breadcrumb trail
pub const BREADCRUMB_ROOT_LABEL: &str = "Indonesia";
