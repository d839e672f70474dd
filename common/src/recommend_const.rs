//! Constants shared by the recommendation page and the gateway.

/// Options shown per filter group before the "Meer" toggle is used.
pub const VISIBLE_OPTION_LIMIT: usize = 5;

pub const NOT_AVAILABLE: &str = "Niet beschikbaar";

pub const EXPAND_LABEL: &str = "Meer";
pub const COLLAPSE_LABEL: &str = "Minder";

pub const FILTER_OPTIONS_PATH: &str = "/get_filter_options";
pub const FILTERED_NAMES_PATH: &str = "/get_filtered_names";
pub const QUERY_PATH: &str = "/query";
