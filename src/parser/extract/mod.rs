pub mod answer;
pub mod aside;
pub mod flights;
pub mod lyrics;
pub mod news;
pub mod snippet;
pub mod translation;
pub mod weather;
pub mod web;

use scraper::Html;
use tracing::debug;

use crate::schema::SearchResult;
use crate::selectors::SelectorTable;

/// Run every section extractor against one parsed page.
pub fn extract_all(doc: &Html, table: &SelectorTable) -> SearchResult {
    let result = SearchResult {
        snippet: snippet::extract(doc, &table.snippet),
        aside: aside::extract(doc, &table.aside),
        weather: weather::extract(doc, &table.weather),
        web: web::extract(doc, &table.web),
        flights: flights::extract(doc, &table.flights),
        lyrics: lyrics::extract(doc, &table.lyrics),
        answer: answer::extract(doc, &table.answer),
        news: news::extract(doc, &table.news),
        translation: translation::extract(doc, &table.translation),
    };

    debug!(
        snippet = result.snippet.is_some(),
        aside = result.aside.is_some(),
        weather = result.weather.is_some(),
        web = result.web.len(),
        flights = result.flights.len(),
        lyrics = result.lyrics.is_some(),
        answer = result.answer.is_some(),
        news = result.news.len(),
        translation = result.translation.is_some(),
        "Extracted sections"
    );

    result
}

// ── Tests ──
