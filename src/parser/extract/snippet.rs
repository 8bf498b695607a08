use scraper::Html;

use crate::parser::dom::{first, some_text};
use crate::parser::markdown::element_to_markdown;
use crate::schema::Snippet;
use crate::selectors::SnippetRules;

/// The converted element is the block itself when it matches `target`,
/// otherwise the first `target` match inside it.
pub fn extract(doc: &Html, rules: &SnippetRules) -> Option<Snippet> {
    let block = first(doc.root_element(), &rules.root)?;
    let target = Some(block)
        .filter(|b| rules.target.matches(b))
        .or_else(|| first(block, &rules.target));

    Some(Snippet {
        text: target.map(element_to_markdown).unwrap_or_default(),
        highlighted: some_text(first(block, &rules.highlighted)),
    })
}
