pub mod dom;
pub mod extract;
pub mod markdown;

use scraper::Html;

use crate::schema::SearchResult;
use crate::selectors::SelectorTable;

/// Parse a results page with the built-in selectors.
pub fn parse(html: &str) -> SearchResult {
    extract::extract_all(&Html::parse_document(html), SelectorTable::builtin())
}

/// Page extractor bound to one selector table.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    table: SelectorTable,
}

impl Extractor {
    pub fn new(table: SelectorTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &SelectorTable {
        &self.table
    }

    /// Each call parses its own document; nothing is shared between calls.
    pub fn parse(&self, html: &str) -> SearchResult {
        self.extract(&Html::parse_document(html))
    }

    pub fn extract(&self, doc: &Html) -> SearchResult {
        extract::extract_all(doc, &self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_extractor_matches_parse() {
        let html = std::fs::read_to_string("tests/fixtures/featured.html").unwrap();
        assert_eq!(Extractor::default().parse(&html), parse(&html));
    }

    #[test]
    fn custom_selectors() {
        let table = SelectorTable::from_json(
            r##"{ "answer": { "primary": "#answer", "fallback": ".alt" } }"##,
        )
        .unwrap();
        let extractor = Extractor::new(table);
        let result = extractor.parse(r#"<div id="answer">42</div>"#);
        assert_eq!(result.answer.and_then(|a| a.text).as_deref(), Some("42"));
        assert_eq!(extractor.table().answer.fallback.as_str(), ".alt");
    }
}
