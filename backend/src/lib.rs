//! Server-side calls to the upstream recommender.

pub mod config;
pub mod api;
pub mod upstream_utils;
