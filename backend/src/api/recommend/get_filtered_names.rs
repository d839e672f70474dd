use common::{filter_options::SelectedFilters, recommend_const::FILTERED_NAMES_PATH, recommendation::FilteredNames};

use crate::upstream_utils::recommender_client::RecommenderClient;

pub async fn get_filtered_names(recommender: &RecommenderClient, filters: SelectedFilters) -> anyhow::Result<FilteredNames> {
    let names = recommender.post_json::<_, FilteredNames>(FILTERED_NAMES_PATH, &filters).await?;
    tracing::info!("get_filtered_names: {} candidates", names.names.len());
    Ok(names)
}
