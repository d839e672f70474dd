//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod filter_options;
pub mod recommendation;
pub mod recommend_const;
