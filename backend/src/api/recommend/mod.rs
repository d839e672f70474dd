//! Recommendation API calls forwarded to the upstream recommender.

mod get_filter_options;
pub use get_filter_options::get_filter_options;

mod get_filtered_names;
pub use get_filtered_names::get_filtered_names;

mod query_recommendations;
pub use query_recommendations::query_recommendations;
