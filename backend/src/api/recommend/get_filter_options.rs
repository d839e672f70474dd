use common::{filter_options::{FilterCategory, FilterOptionSet}, recommend_const::FILTER_OPTIONS_PATH};

use crate::upstream_utils::recommender_client::RecommenderClient;

pub async fn get_filter_options(recommender: &RecommenderClient) -> anyhow::Result<FilterOptionSet> {
    let raw = recommender.get_json::<FilterOptionSet>(FILTER_OPTIONS_PATH).await?;
    Ok(FilterOptionSet {
        meal_type: raw.normalized_options(FilterCategory::MealType),
        district: raw.normalized_options(FilterCategory::District),
        restaurant_type: raw.normalized_options(FilterCategory::RestaurantType),
        price_level: raw.normalized_options(FilterCategory::PriceLevel),
    })
}
