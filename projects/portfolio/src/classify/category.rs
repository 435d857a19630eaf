use std::fmt;

/// Filter bucket a card is tagged with (`data-category`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Erp,
    Web,
    Games,
    Tools,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Erp => "erp",
            Category::Web => "web",
            Category::Games => "games",
            Category::Tools => "tools",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checked top to bottom; the first category with any hit wins, so order
/// decides ambiguous repositories.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Erp, &["erp", "inventory", "management-system"]),
    (Category::Web, &["clinic", "appointment", "medical", "qr", "ltpms"]),
    (Category::Games, &["game", "unity", "pygame"]),
    (
        Category::Tools,
        &["api", "restful", "task-manager", "expense", "post-management", "beginner"],
    ),
];

pub const DEFAULT_CATEGORY: Category = Category::Tools;

/// Keywords match as substrings of the name or description, but topics only
/// match whole.
pub fn assign_category(name: &str, topics: &[String], description: Option<&str>) -> Category {
    let name = name.to_lowercase();
    let description = description.unwrap_or_default().to_lowercase();
    let topics: Vec<String> = topics.iter().map(|topic| topic.to_lowercase()).collect();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords.iter().any(|keyword| {
                name.contains(keyword)
                    || description.contains(keyword)
                    || topics.iter().any(|topic| topic == keyword)
            })
        })
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}
