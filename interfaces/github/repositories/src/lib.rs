//! GitHub REST calls used to describe an account's public repositories
//!
//! - `index` holds the listing and languages requests
//! - `models` holds the JSON payloads they return

pub mod index;
pub mod models;
