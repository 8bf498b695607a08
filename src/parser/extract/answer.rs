use scraper::Html;

use crate::parser::dom::{first, some_text};
use crate::schema::Answer;
use crate::selectors::AnswerRules;

/// Direct answer box, trying the primary layout before the fallback.
pub fn extract(doc: &Html, rules: &AnswerRules) -> Option<Answer> {
    let root = doc.root_element();
    let node = first(root, &rules.primary).or_else(|| first(root, &rules.fallback))?;

    Some(Answer {
        text: some_text(Some(node)),
    })
}
