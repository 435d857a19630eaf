use std::path::PathBuf;

use interfaces_github_repositories::index::{DEFAULT_USER_AGENT, GITHUB_API_BASE};

use crate::render::RenderOptions;
use crate::splice::SpliceRegion;

pub const DEFAULT_ACCOUNT: &str = "Erzan12";
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";
pub const LISTING_PAGE_SIZE: u8 = 100;

/// Everything one pipeline run needs. Several configs can run side by side
/// in the same process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioConfig {
    pub account: String,
    pub output_path: PathBuf,
    pub api_base: String,
    pub per_page: u8,
    pub user_agent: String,
    pub region: SpliceRegion,
    pub render: RenderOptions,
    /// Render the cards but leave the output document alone.
    pub dry_run: bool,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            api_base: GITHUB_API_BASE.to_string(),
            per_page: LISTING_PAGE_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            region: SpliceRegion::default(),
            render: RenderOptions::default(),
            dry_run: false,
        }
    }
}
