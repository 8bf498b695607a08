use scraper::Html;

use crate::parser::dom::{first, render_text, text_of, TextOptions};
use crate::schema::Aside;
use crate::selectors::AsideRules;

/// Knowledge panel facts, one per line. `None` only when no fact matched; a
/// panel whose facts are all blank yields an empty text.
///
/// Within a fact, text nodes are joined by a single space. The detail text is
/// then removed by plain substring replacement. That is a best-effort cleanup:
/// a detail rendered with different whitespace than the fact survives.
pub fn extract(doc: &Html, rules: &AsideRules) -> Option<Aside> {
    let root = doc.root_element();
    let detail = text_of(first(root, &rules.detail));

    let facts: Vec<String> = root
        .select(&rules.facts)
        .map(|fact| clean_fact(&render_text(*fact, TextOptions::joined(" ")), &detail))
        .collect();
    if facts.is_empty() {
        return None;
    }

    let lines: Vec<String> = facts.into_iter().filter(|f| !f.is_empty()).collect();
    Some(Aside {
        text: lines.join("\n"),
    })
}

fn clean_fact(fact: &str, detail: &str) -> String {
    let fact = if detail.is_empty() {
        fact.to_string()
    } else {
        fact.replace(detail, "")
    };
    fact.replace("  ", " ").trim().to_string()
}
