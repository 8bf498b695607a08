use scraper::{ElementRef, Html};
use tracing::debug;

use crate::parser::dom::{nth, some_text, text_at};
use crate::schema::{Translation, TranslationSide};
use crate::selectors::TranslationRules;

// Positions within `TranslationRules::fields`.
const SOURCE_TEXT: usize = 0;
const SOURCE_PRONUNCIATION: usize = 1;
const TARGET_TEXT: usize = 2;
const TARGET_PRONUNCIATION: usize = 3;

pub fn extract(doc: &Html, rules: &TranslationRules) -> Option<Translation> {
    let Some(panel) = doc.root_element().select(&rules.panel).next() else {
        debug!("No translation panel");
        return None;
    };

    Some(Translation {
        source: side(panel, rules, 0, SOURCE_TEXT, SOURCE_PRONUNCIATION),
        target: side(panel, rules, 1, TARGET_TEXT, TARGET_PRONUNCIATION),
    })
}

fn side(
    panel: ElementRef<'_>,
    rules: &TranslationRules,
    language: usize,
    text: usize,
    pronunciation: usize,
) -> TranslationSide {
    TranslationSide {
        language: text_at(panel, &rules.languages, language),
        text: text_at(panel, &rules.fields, text),
        pronunciation: some_text(nth(panel, &rules.fields, pronunciation)),
    }
}
