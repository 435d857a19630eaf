pub mod category;
pub mod tech_stack;

use interfaces_github_repositories::models::{LanguageBreakdown, RepositorySummary};

pub use category::{assign_category, Category};
pub use tech_stack::TechStack;

/// A repository with everything the renderer needs.
#[derive(Debug, Clone)]
pub struct ClassifiedRepository {
    pub repository: RepositorySummary,
    pub category: Category,
    pub tech_stack: TechStack,
}

pub fn classify(repository: RepositorySummary, languages: &LanguageBreakdown) -> ClassifiedRepository {
    let category = assign_category(
        &repository.name,
        &repository.topics,
        repository.description.as_deref(),
    );
    let tech_stack = TechStack::derive(languages, &repository.topics);

    ClassifiedRepository {
        repository,
        category,
        tech_stack,
    }
}
