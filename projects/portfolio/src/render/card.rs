use std::borrow::Cow;

use crate::classify::ClassifiedRepository;
use crate::utils::html::escape_html;

pub const MISSING_DESCRIPTION: &str = "No description provided";

/// Knobs for card output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape repository-supplied text. Off by default: the listing is the
    /// owner's own account and existing templates rely on verbatim output.
    pub escape_html: bool,
}

/// Where a card's call-to-action points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLink<'a> {
    pub url: &'a str,
    pub text: &'static str,
}

impl<'a> CardLink<'a> {
    pub fn for_repository(classified: &'a ClassifiedRepository) -> Self {
        match classified.repository.homepage.as_deref() {
            Some(homepage) => CardLink {
                url: homepage,
                text: "DEMO",
            },
            None => CardLink {
                url: &classified.repository.html_url,
                text: "CODE",
            },
        }
    }
}

pub fn display_name(name: &str) -> String {
    name.replace('-', " ")
}

pub fn render_card(classified: &ClassifiedRepository, options: &RenderOptions) -> String {
    let text = |value: &str| -> String {
        if options.escape_html {
            escape_html(value).into_owned()
        } else {
            value.to_owned()
        }
    };

    let repository = &classified.repository;
    let link = CardLink::for_repository(classified);
    let name = text(&display_name(&repository.name));
    let tech_stack = classified.tech_stack.render(options.escape_html);
    let description = match repository.description.as_deref() {
        Some(description) => Cow::Owned(text(description)),
        None => Cow::Borrowed(MISSING_DESCRIPTION),
    };

    format!(
        r#"
                <div class="project-item link-card bg-slate-800/30 border border-slate-700 hover:border-accent rounded-xl p-4" data-category="{category}">
                    <div class="flex justify-between items-start mb-2">
                        <div>
                            <h3 class="font-bold text-white text-sm uppercase">{name}</h3>
                            <span class="text-[10px] text-accent font-mono">{tech_stack}</span>
                        </div>
                        <a href="{link_url}" class="text-[10px] px-3 py-1.5 rounded-lg bg-gradient-to-r from-slate-700 to-slate-800 hover:from-accent hover:to-blue-500 hover:text-maritime transition-all font-bold border border-slate-600 hover:border-accent">{link_text}</a>
                    </div>
                    <p class="text-xs text-slate-400 leading-relaxed">{description}</p>
                </div>
"#,
        category = classified.category,
        link_url = text(link.url),
        link_text = link.text,
    )
}
