pub mod error_boundary;
pub mod loading_indicator;
pub mod user_alert;
pub mod recommend_components;
