use scraper::Html;

use crate::parser::dom::{first, render_text, some_text, TextOptions};
use crate::schema::Lyrics;
use crate::selectors::LyricsRules;

pub fn extract(doc: &Html, rules: &LyricsRules) -> Option<Lyrics> {
    let root = doc.root_element();
    let lines: Vec<String> = root
        .select(&rules.line)
        .map(|line| render_text(*line, TextOptions::TRIMMED))
        .collect();
    if lines.is_empty() {
        return None;
    }

    Some(Lyrics {
        text: lines.join("\n"),
        is_partial: first(root, &rules.more).is_some(),
        source: some_text(first(root, &rules.source)),
    })
}
