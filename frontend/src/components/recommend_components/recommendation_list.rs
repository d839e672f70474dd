use common::recommendation::Restaurant;
use dioxus::prelude::*;

use crate::{
    components::{loading_indicator::LoadingIndicator, recommend_components::restaurant_card::RestaurantCard},
    pages::recommend_page::PageContext,
};


#[component]
pub fn RecommendationList() -> Element {
    let page_state = use_context::<PageContext>().page_state;
    let (loading, results) = {
        let state = page_state.read();
        (state.loading, state.results.clone())
    };

    if loading {
        return rsx! { LoadingIndicator {} };
    }
    rsx! {
        RestaurantCardList { results }
    }
}

/// One card per record, in the order given.
#[component]
pub fn RestaurantCardList(results: Vec<Restaurant>) -> Element {
    rsx! {
        div {
            id: "recommendations",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
            ",
            for (index, restaurant) in results.into_iter().enumerate() {
                RestaurantCard { key: "{index}-{restaurant.name}", restaurant }
            }
        }
    }
}
