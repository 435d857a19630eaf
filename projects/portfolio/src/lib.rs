//! Portfolio projects updater
//!
//! - GitHub listing and classification in `pipeline/` and `classify/`
//! - HTML cards in `render/`
//! - Marker-bounded rewrite of the output document in `splice/`

pub mod classify;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod render;
pub mod splice;
pub mod utils;
