use thiserror::Error;

pub const DEFAULT_REGION_NAME: &str = "projects";

const LEGACY_START_MARKER: &str = r#"<div class="grid grid-cols-1 gap-4">"#;
const LEGACY_END_MARKER: &str = "</div>\n        </section>\n\n        <section class=\"w-full text-left pt-6 border-t border-slate-800 scroll-reveal\">\n            <h2 class=\"text-2xl font-bold text-white mb-6 flex items-center gap-3\">\n                <span class=\"text-accent\"><i class=\"fas fa-code\"></i></span>";

/// The editable part of the output document, delimited by two literal
/// markers. Everything outside it is copied through byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceRegion {
    pub start_marker: String,
    pub end_marker: String,
}

impl SpliceRegion {
    /// `<!-- BEGIN name -->` ... `<!-- END name -->`
    pub fn named(name: &str) -> Self {
        Self {
            start_marker: format!("<!-- BEGIN {name} -->"),
            end_marker: format!("<!-- END {name} -->"),
        }
    }

    /// Markers of the original portfolio template: the projects grid opening
    /// tag, and the close of the projects section up to the next heading.
    pub fn legacy() -> Self {
        Self {
            start_marker: LEGACY_START_MARKER.to_string(),
            end_marker: LEGACY_END_MARKER.to_string(),
        }
    }
}

impl Default for SpliceRegion {
    fn default() -> Self {
        Self::named(DEFAULT_REGION_NAME)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("MarkerNotFound: start marker found: {start_found}, end marker found: {end_found}")]
pub struct MarkerNotFound {
    pub start_found: bool,
    pub end_found: bool,
}

/// Replaces the region's contents with `fragment`.
///
/// The end marker is looked up after the start marker. The new contents are
/// `\n{fragment}\n` followed by the indentation the end marker currently sits
/// at, which keeps repeated runs byte-identical.
pub fn splice_region(
    document: &str,
    region: &SpliceRegion,
    fragment: &str,
) -> Result<String, MarkerNotFound> {
    let start = document.find(&region.start_marker);
    let content_start = start.map(|start| start + region.start_marker.len());
    let end = content_start.and_then(|from| {
        document[from..]
            .find(&region.end_marker)
            .map(|offset| from + offset)
    });

    let (content_start, end) = match (content_start, end) {
        (Some(content_start), Some(end)) => (content_start, end),
        _ => {
            return Err(MarkerNotFound {
                start_found: start.is_some(),
                end_found: end.is_some()
                    || (start.is_none() && document.contains(&region.end_marker)),
            })
        }
    };

    let indent = closing_indent(&document[content_start..end]);

    let mut spliced = String::with_capacity(document.len() + fragment.len());
    spliced.push_str(&document[..content_start]);
    spliced.push('\n');
    spliced.push_str(fragment);
    spliced.push('\n');
    spliced.push_str(indent);
    spliced.push_str(&document[end..]);

    Ok(spliced)
}

// Whitespace between the last line break of the region and the end marker.
fn closing_indent(current: &str) -> &str {
    match current.rfind('\n') {
        Some(newline) => {
            let tail = &current[newline + 1..];
            if tail.chars().all(|c| c == ' ' || c == '\t') {
                tail
            } else {
                ""
            }
        }
        None => "",
    }
}
