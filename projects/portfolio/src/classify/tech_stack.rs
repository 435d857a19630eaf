use interfaces_github_repositories::models::LanguageBreakdown;

use crate::utils::html::escape_html;

pub const TECH_STACK_SEPARATOR: &str = " &bull; ";
pub const TECH_STACK_PLACEHOLDER: &str = "Code Repository";

const MAX_LANGUAGES: usize = 4;
const MAX_TOPICS: usize = 3;
const MAX_ENTRIES: usize = 5;
const IGNORED_TOPICS: &[&str] = &["portfolio", "project"];

/// Languages first, then topics, capped at five entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechStack {
    entries: Vec<String>,
}

impl TechStack {
    pub fn derive(languages: &LanguageBreakdown, topics: &[String]) -> Self {
        let languages = languages.names().take(MAX_LANGUAGES).map(str::to_owned);
        let topics = topics
            .iter()
            .filter(|topic| !IGNORED_TOPICS.contains(&topic.to_lowercase().as_str()))
            .take(MAX_TOPICS)
            .cloned();

        let entries = languages.chain(topics).take(MAX_ENTRIES).collect();

        Self { entries }
    }

    #[cfg(test)]
    fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Joins the entries for the card. The separator is markup already, so
    /// only the entries are escaped.
    pub fn render(&self, escape: bool) -> String {
        if self.entries.is_empty() {
            return TECH_STACK_PLACEHOLDER.to_string();
        }

        if escape {
            self.entries
                .iter()
                .map(|entry| escape_html(entry).into_owned())
                .collect::<Vec<_>>()
                .join(TECH_STACK_SEPARATOR)
        } else {
            self.entries.join(TECH_STACK_SEPARATOR)
        }
    }
}
