use interfaces_github_repositories::index::{
    fetch_repository_languages, fetch_user_repositories, FetchUserRepositoriesError,
};
use interfaces_github_repositories::models::{LanguageBreakdown, RepositorySummary};
use reqwest::Client;
use tracing::debug;

use crate::classify::{classify, ClassifiedRepository};
use crate::config::PortfolioConfig;

/// Drops forks and orders by last update, newest first. Ties keep the
/// order the API returned them in.
pub fn select_repositories(repositories: Vec<RepositorySummary>) -> Vec<RepositorySummary> {
    let mut selected: Vec<RepositorySummary> = repositories
        .into_iter()
        .filter(|repository| !repository.fork)
        .collect();
    selected.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    selected
}

pub async fn fetch_repositories(
    client: &Client,
    config: &PortfolioConfig,
) -> Result<Vec<RepositorySummary>, FetchUserRepositoriesError> {
    let repositories =
        fetch_user_repositories(client, &config.api_base, &config.account, config.per_page).await?;

    Ok(select_repositories(repositories))
}

#[derive(Debug, Default)]
pub struct Classification {
    pub repositories: Vec<ClassifiedRepository>,
    /// Repositories whose languages could not be fetched and were
    /// classified with an empty breakdown.
    pub language_failures: usize,
}

/// One languages request per repository, in order.
pub async fn classify_repositories(
    client: &Client,
    repositories: Vec<RepositorySummary>,
) -> Classification {
    let mut classification = Classification::default();

    for repository in repositories {
        let languages = match fetch_repository_languages(client, &repository.languages_url).await {
            Ok(languages) => languages,
            Err(err) => {
                debug!(repository = %repository.name, "Languages unavailable: {err}");
                classification.language_failures += 1;
                LanguageBreakdown::default()
            }
        };

        classification
            .repositories
            .push(classify(repository, &languages));
    }

    classification
}
