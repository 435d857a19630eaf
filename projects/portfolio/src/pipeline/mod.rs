pub mod fetch;

use std::path::PathBuf;

use chrono::Local;
use interfaces_github_repositories::index::{build_client, BuildClientError, FetchUserRepositoriesError};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::PortfolioConfig;
use crate::render::render_cards;
use crate::splice::{update_document, DocumentUpdate, UpdateDocumentError};

use fetch::{classify_repositories, fetch_repositories};

const LISTED_NAMES: usize = 5;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("BuildClient: {source}")]
    BuildClient {
        #[from]
        source: BuildClientError,
    },

    #[error("FetchRepositories: {source}")]
    FetchRepositories {
        #[from]
        source: FetchUserRepositoriesError,
    },

    #[error("NoRepositories: {account} has no public non-fork repositories")]
    NoRepositories {
        account: String,
    },

    #[error("UpdateDocument: {source}")]
    UpdateDocument {
        #[from]
        source: UpdateDocumentError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written {
        path: PathBuf,
        update: DocumentUpdate,
    },
    DryRun {
        cards: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub repository_count: usize,
    pub language_failures: usize,
    pub outcome: RunOutcome,
}

/// Fetch, classify, render and splice for one account.
pub async fn run(config: &PortfolioConfig) -> Result<RunReport, RunError> {
    let client = build_client(&config.user_agent)?;

    info!("Fetching repositories for {}...", config.account);
    let repositories = fetch_repositories(&client, config)
        .await
        .inspect_err(|err| warn!("Error fetching repos: {err}"))?;

    if repositories.is_empty() {
        return Err(RunError::NoRepositories {
            account: config.account.clone(),
        });
    }

    let repository_count = repositories.len();
    let listed: Vec<&str> = repositories
        .iter()
        .take(LISTED_NAMES)
        .map(|repository| repository.name.as_str())
        .collect();
    info!("Found {repository_count} public repositories");
    info!(
        "Repositories: {}{}",
        listed.join(", "),
        if repository_count > LISTED_NAMES { "..." } else { "" }
    );

    let classification = classify_repositories(&client, repositories).await;
    if classification.language_failures > 0 {
        warn!(
            "Language breakdown unavailable for {} repositories",
            classification.language_failures
        );
    }

    let cards = render_cards(&classification.repositories, &config.render);

    let outcome = if config.dry_run {
        RunOutcome::DryRun { cards }
    } else {
        let update = update_document(&config.output_path, &config.region, &cards).await?;
        info!("Portfolio updated successfully at {}", Local::now());
        RunOutcome::Written {
            path: config.output_path.clone(),
            update,
        }
    };

    Ok(RunReport {
        repository_count,
        language_failures: classification.language_failures,
        outcome,
    })
}
