use common::{recommend_const::QUERY_PATH, recommendation::{RecommendationQuery, Restaurant}};

use crate::upstream_utils::recommender_client::RecommenderClient;

/// Detailed records for the question, restricted to the candidate names; upstream order is kept.
pub async fn query_recommendations(recommender: &RecommenderClient, query: RecommendationQuery) -> anyhow::Result<Vec<Restaurant>> {
    let restaurants = recommender.post_json::<_, Vec<Restaurant>>(QUERY_PATH, &query).await?;
    tracing::info!("query: {} candidates -> {} recommendations", query.names.len(), restaurants.len());
    Ok(restaurants)
}
