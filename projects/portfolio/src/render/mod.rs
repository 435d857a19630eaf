pub mod card;

pub use card::{render_card, RenderOptions};

use crate::classify::ClassifiedRepository;

/// All cards in listing order, joined the way the template expects.
pub fn render_cards(repositories: &[ClassifiedRepository], options: &RenderOptions) -> String {
    repositories
        .iter()
        .map(|classified| render_card(classified, options))
        .collect::<Vec<_>>()
        .join("\n")
}
