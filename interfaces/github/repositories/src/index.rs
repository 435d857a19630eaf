use reqwest::{header, Client, StatusCode};
use thiserror::Error;

use crate::models::{LanguageBreakdown, RepositorySummary};

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "rust-client";

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Error)]
pub enum BuildClientError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },
}

/// GitHub rejects requests without a `User-Agent`, so every call goes
/// through a client that carries one.
pub fn build_client(user_agent: &str) -> Result<Client, BuildClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, header::HeaderValue::from_static(GITHUB_ACCEPT));

    Client::builder()
        .user_agent(user_agent)
        .default_headers(headers)
        .build()
        .map_err(|source| BuildClientError::ClientBuild { source })
}

/// Lists the public repositories of `account`, most recently updated first
/// as far as the API sorts them. A single page of at most `per_page` items.
pub async fn fetch_user_repositories(
    client: &Client,
    api_base: &str,
    account: &str,
    per_page: u8,
) -> Result<Vec<RepositorySummary>, FetchUserRepositoriesError> {
    let url = format!("{}/users/{account}/repos", api_base.trim_end_matches('/'));

    let response = client
        .get(&url)
        .query(&[("per_page", per_page.to_string()), ("sort", "updated".to_string())])
        .send()
        .await
        .map_err(|source| FetchUserRepositoriesError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchUserRepositoriesError::ResponseRead { source })?;

    if !status.is_success() {
        return Err(FetchUserRepositoriesError::UnexpectedStatus { status, body });
    }

    let repositories: Vec<RepositorySummary> = serde_json::from_str(&body)?;

    Ok(repositories)
}

#[derive(Debug, Error)]
pub enum FetchUserRepositoriesError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("UnexpectedStatus: {status}")]
    UnexpectedStatus {
        status: StatusCode,
        body: String,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        #[from]
        source: serde_json::Error,
    },
}

/// Fetches the language byte counts behind a repository's `languages_url`.
pub async fn fetch_repository_languages(
    client: &Client,
    languages_url: &str,
) -> Result<LanguageBreakdown, FetchRepositoryLanguagesError> {
    let response = client
        .get(languages_url)
        .send()
        .await
        .map_err(|source| FetchRepositoryLanguagesError::RequestSend { source })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchRepositoryLanguagesError::UnexpectedStatus { status });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchRepositoryLanguagesError::ResponseRead { source })?;

    let breakdown: LanguageBreakdown = serde_json::from_str(&body)?;

    Ok(breakdown)
}

#[derive(Debug, Error)]
pub enum FetchRepositoryLanguagesError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("UnexpectedStatus: {status}")]
    UnexpectedStatus {
        status: StatusCode,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        #[from]
        source: serde_json::Error,
    },
}
