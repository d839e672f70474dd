use dioxus::prelude::*;

use crate::pages::recommend_page::RecommendPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    RecommendPage {},
}
