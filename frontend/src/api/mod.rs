pub mod recommend_api;
