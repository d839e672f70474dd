//! Server functions for the recommendation endpoints and the submission flow built on them.

use common::{
    filter_options::{FilterOptionSet, SelectedFilters},
    recommend_const::{FILTERED_NAMES_PATH, FILTER_OPTIONS_PATH, QUERY_PATH},
    recommendation::{FilteredNames, RecommendationQuery, Restaurant},
};
use dioxus::logger::tracing;
use dioxus::prelude::*;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    FilterOptions,
    FilteredNames,
    Query,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::FilterOptions => FILTER_OPTIONS_PATH,
            Endpoint::FilteredNames => FILTERED_NAMES_PATH,
            Endpoint::Query => QUERY_PATH,
        }
    }

    /// Static alert text shown when a call to this endpoint fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            Endpoint::FilterOptions => "Failed to load filter options. Please try again.",
            Endpoint::FilteredNames => "Failed to fetch filtered names. Please try again.",
            Endpoint::Query => "Failed to fetch recommendations. Please try again.",
        }
    }
}

/// Network failure, non-2xx status or undecodable body; the cause is kept for logs only.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestFailed {
    pub endpoint: Endpoint,
    pub reason: String,
}

impl RequestFailed {
    pub fn new(endpoint: Endpoint, reason: impl std::fmt::Display) -> Self {
        Self { endpoint, reason: reason.to_string() }
    }

    pub fn user_message(&self) -> &'static str {
        self.endpoint.user_message()
    }
}

impl std::fmt::Display for RequestFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Request to {} failed: {}", self.endpoint.path(), self.reason)
    }
}

impl std::error::Error for RequestFailed {}


#[get("/get_filter_options")]
pub async fn get_filter_options() -> Result<FilterOptionSet, ServerFnError> {
    let recommender = backend::upstream_utils::recommender_client::get_recommender_client();
    let x = backend::api::recommend::get_filter_options(&recommender).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}

#[post("/get_filtered_names")]
pub async fn get_filtered_names(
    meal_type: Vec<String>,
    district: Vec<String>,
    restaurant_type: Vec<String>,
    price_level: Vec<String>,
) -> Result<FilteredNames, ServerFnError> {
    let recommender = backend::upstream_utils::recommender_client::get_recommender_client();
    let filters = SelectedFilters { meal_type, district, restaurant_type, price_level };
    let x = backend::api::recommend::get_filtered_names(&recommender, filters).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}

#[post("/query")]
pub async fn query(question: String, names: Vec<String>) -> Result<Vec<Restaurant>, ServerFnError> {
    let recommender = backend::upstream_utils::recommender_client::get_recommender_client();
    let x = backend::api::recommend::query_recommendations(&recommender, RecommendationQuery { question, names }).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}


#[allow(async_fn_in_trait)]
pub trait RecommendationApi {
    async fn filter_options(&self) -> Result<FilterOptionSet, RequestFailed>;
    async fn filtered_names(&self, filters: &SelectedFilters) -> Result<FilteredNames, RequestFailed>;
    async fn recommendations(&self, query: RecommendationQuery) -> Result<Vec<Restaurant>, RequestFailed>;
}

/// Calls the server functions above.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerRecommendationApi;

impl RecommendationApi for ServerRecommendationApi {
    async fn filter_options(&self) -> Result<FilterOptionSet, RequestFailed> {
        get_filter_options().await.map_err(|e| RequestFailed::new(Endpoint::FilterOptions, e))
    }

    async fn filtered_names(&self, filters: &SelectedFilters) -> Result<FilteredNames, RequestFailed> {
        let SelectedFilters { meal_type, district, restaurant_type, price_level } = filters.clone();
        get_filtered_names(meal_type, district, restaurant_type, price_level)
            .await
            .map_err(|e| RequestFailed::new(Endpoint::FilteredNames, e))
    }

    async fn recommendations(&self, query: RecommendationQuery) -> Result<Vec<Restaurant>, RequestFailed> {
        self::query(query.question, query.names).await.map_err(|e| RequestFailed::new(Endpoint::Query, e))
    }
}


/// Filter step, then detail step with whatever names the filter step returned.
/// The detail step only starts after the filter step succeeded.
pub async fn run_submission<A: RecommendationApi>(
    api: &A,
    question: String,
    filters: &SelectedFilters,
) -> Result<Vec<Restaurant>, RequestFailed> {
    let candidates = api.filtered_names(filters).await?;
    tracing::info!("submission: {} candidates", candidates.names.len());
    let query = RecommendationQuery { question, names: candidates.names };
    api.recommendations(query).await
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use common::filter_options::FilterCategory;

    use super::*;

    fn restaurant(name: &str) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            summary: format!("{name} summary"),
            image_url: format!("https://example.org/{name}.jpg"),
            website_url: String::new(),
            instagram_url: String::new(),
            restaurant_type: String::new(),
            district: String::new(),
            meal_type: String::new(),
            price_level: String::new(),
        }
    }

    struct FakeApi {
        names: Result<Vec<String>, RequestFailed>,
        records: Result<Vec<Restaurant>, RequestFailed>,
        calls: RefCell<Vec<Endpoint>>,
        seen_filters: RefCell<Option<SelectedFilters>>,
        seen_query: RefCell<Option<RecommendationQuery>>,
    }

    impl FakeApi {
        fn new(names: Result<Vec<String>, RequestFailed>, records: Result<Vec<Restaurant>, RequestFailed>) -> Self {
            Self {
                names,
                records,
                calls: RefCell::new(Vec::new()),
                seen_filters: RefCell::new(None),
                seen_query: RefCell::new(None),
            }
        }
    }

    impl RecommendationApi for FakeApi {
        async fn filter_options(&self) -> Result<FilterOptionSet, RequestFailed> {
            self.calls.borrow_mut().push(Endpoint::FilterOptions);
            Ok(FilterOptionSet::default())
        }

        async fn filtered_names(&self, filters: &SelectedFilters) -> Result<FilteredNames, RequestFailed> {
            self.calls.borrow_mut().push(Endpoint::FilteredNames);
            *self.seen_filters.borrow_mut() = Some(filters.clone());
            self.names.clone().map(|names| FilteredNames { names })
        }

        async fn recommendations(&self, query: RecommendationQuery) -> Result<Vec<Restaurant>, RequestFailed> {
            self.calls.borrow_mut().push(Endpoint::Query);
            *self.seen_query.borrow_mut() = Some(query);
            self.records.clone()
        }
    }

    #[tokio::test]
    async fn names_feed_the_detail_query() {
        let api = FakeApi::new(Ok(vec!["A".into(), "B".into()]), Ok(vec![restaurant("B"), restaurant("A")]));
        let mut filters = SelectedFilters::default();
        filters.values_mut(FilterCategory::District).push("Centrum".into());

        let outcome = run_submission(&api, "romantisch diner".into(), &filters).await.unwrap();

        assert_eq!(outcome, vec![restaurant("B"), restaurant("A")]);
        assert_eq!(*api.calls.borrow(), vec![Endpoint::FilteredNames, Endpoint::Query]);
        assert_eq!(api.seen_filters.borrow().as_ref(), Some(&filters));
        assert_eq!(
            api.seen_query.borrow().as_ref(),
            Some(&RecommendationQuery { question: "romantisch diner".into(), names: vec!["A".into(), "B".into()] })
        );
    }

    #[tokio::test]
    async fn failed_filter_step_never_queries() {
        let api = FakeApi::new(
            Err(RequestFailed::new(Endpoint::FilteredNames, "500 Internal Server Error")),
            Ok(vec![restaurant("A")]),
        );

        let failure = run_submission(&api, "x".into(), &SelectedFilters::default()).await.unwrap_err();

        assert_eq!(failure.endpoint, Endpoint::FilteredNames);
        assert_eq!(failure.user_message(), "Failed to fetch filtered names. Please try again.");
        assert_eq!(*api.calls.borrow(), vec![Endpoint::FilteredNames]);
    }

    #[tokio::test]
    async fn failed_detail_step_is_reported_for_query() {
        let api = FakeApi::new(Ok(vec!["A".into()]), Err(RequestFailed::new(Endpoint::Query, "timeout")));

        let failure = run_submission(&api, "x".into(), &SelectedFilters::default()).await.unwrap_err();

        assert_eq!(failure.endpoint, Endpoint::Query);
        assert_eq!(failure.user_message(), "Failed to fetch recommendations. Please try again.");
    }

    #[tokio::test]
    async fn empty_candidate_list_still_queries() {
        let api = FakeApi::new(Ok(vec![]), Ok(vec![restaurant("A")]));

        let outcome = run_submission(&api, "x".into(), &SelectedFilters::default()).await.unwrap();

        assert_eq!(outcome, vec![restaurant("A")]);
        assert_eq!(*api.calls.borrow(), vec![Endpoint::FilteredNames, Endpoint::Query]);
        assert_eq!(api.seen_query.borrow().as_ref().map(|q| q.names.clone()), Some(Vec::<String>::new()));
    }

    #[test]
    fn request_failed_display_names_the_endpoint() {
        let failure = RequestFailed::new(Endpoint::FilterOptions, "connection refused");
        assert_eq!(failure.to_string(), "Request to /get_filter_options failed: connection refused");
    }
}
