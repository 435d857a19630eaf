use std::path::PathBuf;

use clap::Parser;
use interfaces_github_repositories::index::{DEFAULT_USER_AGENT, GITHUB_API_BASE};

use crate::config::{PortfolioConfig, DEFAULT_ACCOUNT, DEFAULT_OUTPUT_FILE, LISTING_PAGE_SIZE};
use crate::render::RenderOptions;
use crate::splice::region::DEFAULT_REGION_NAME;
use crate::splice::SpliceRegion;

#[derive(Debug, Parser)]
#[command(name = "portfolio-update")]
#[command(about = "Refresh the projects section of a portfolio page from GitHub")]
#[command(version)]
pub struct Cli {
    /// GitHub account whose public repositories are listed
    #[arg(long, env = "PORTFOLIO_ACCOUNT", default_value = DEFAULT_ACCOUNT)]
    pub account: String,

    /// HTML document to update in place
    #[arg(short, long, env = "PORTFOLIO_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    #[arg(long, env = "PORTFOLIO_API_BASE", default_value = GITHUB_API_BASE)]
    pub api_base: String,

    #[arg(long, env = "PORTFOLIO_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Name of the `<!-- BEGIN name -->` / `<!-- END name -->` region
    #[arg(long, env = "PORTFOLIO_REGION", default_value = DEFAULT_REGION_NAME)]
    pub region: String,

    /// Use the original template's literal markers; takes precedence over `--region`
    #[arg(long)]
    pub legacy_markers: bool,

    /// Escape markup in repository names, topics and descriptions
    #[arg(long)]
    pub escape_html: bool,

    /// Print the cards to stdout instead of writing the document
    #[arg(long)]
    pub dry_run: bool,

    /// Exit non-zero when the run fails
    #[arg(long)]
    pub strict: bool,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, env = "PORTFOLIO_LOG", default_value = "info")]
    pub log_level: String,
}

impl From<&Cli> for PortfolioConfig {
    fn from(cli: &Cli) -> Self {
        let region = if cli.legacy_markers {
            SpliceRegion::legacy()
        } else {
            SpliceRegion::named(&cli.region)
        };

        PortfolioConfig {
            account: cli.account.clone(),
            output_path: cli.output.clone(),
            api_base: cli.api_base.clone(),
            per_page: LISTING_PAGE_SIZE,
            user_agent: cli.user_agent.clone(),
            region,
            render: RenderOptions {
                escape_html: cli.escape_html,
            },
            dry_run: cli.dry_run,
        }
    }
}
