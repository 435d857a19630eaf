use clap::Parser;
use projects_portfolio::cli::Cli;
use projects_portfolio::config::PortfolioConfig;
use projects_portfolio::pipeline::{run, RunError, RunOutcome};
use thiserror::Error;
use tracing::{info, warn};
use utils_trace::tracing_init;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("Run: {source}")]
    Run {
        #[source]
        source: RunError,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_init(&cli.log_level).map_err(|source| MainError::TracingInit { source })?;

    let config = PortfolioConfig::from(&cli);

    match run(&config).await {
        Ok(report) => match report.outcome {
            RunOutcome::DryRun { cards } => {
                println!("{cards}");
                info!("Rendered {} projects", report.repository_count);
            }
            RunOutcome::Written { path, .. } => {
                info!("Done! {} has been updated.", path.display());
                info!("Updated with {} projects", report.repository_count);
            }
        },
        Err(source) => {
            match &source {
                RunError::FetchRepositories { .. } | RunError::NoRepositories { .. } => {
                    warn!("No repositories found or API error occurred");
                }
                RunError::UpdateDocument { .. } => {
                    warn!(
                        "Update failed - check that {} exists and has the expected markers",
                        config.output_path.display()
                    );
                }
                RunError::BuildClient { .. } => {}
            }
            warn!("{source}");

            // Failures only affect the exit status when asked for.
            if cli.strict {
                return Err(MainError::Run { source });
            }
        }
    }

    Ok(())
}
