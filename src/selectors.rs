//! Selector table: every site-specific CSS selector the extractors use, kept
//! as data so a markup change on the results page is a table edit, not a code
//! change.
//!
//! The built-in table targets the desktop Google results page. A JSON document
//! with the same shape overrides it section by section; anything left out falls
//! back to the built-in rules.

use std::fmt;
use std::ops::Deref;
use std::path::Path;
use std::sync::LazyLock;

use scraper::Selector;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};

static BUILTIN: LazyLock<SelectorTable> =
    LazyLock::new(|| SelectorTable::google().expect("built-in selector table must parse"));

/// A compiled CSS selector that remembers its source text.
#[derive(Clone)]
pub struct Rule {
    source: String,
    selector: Selector,
}

impl Rule {
    pub fn new(source: &str) -> Result<Self> {
        let selector = Selector::parse(source).map_err(|e| Error::Selector {
            selector: source.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            source: source.to_string(),
            selector,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Deref for Rule {
    type Target = Selector;

    fn deref(&self) -> &Selector {
        &self.selector
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({:?})", self.source)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Rule::new(&source).map_err(de::Error::custom)
    }
}

// ── Per-section rules ──

/// Featured snippet block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetRules {
    /// Locates the block in the full page.
    pub root: Rule,
    /// The node handed to the Markdown converter: the block itself when it
    /// matches, otherwise the first match inside it.
    pub target: Rule,
    pub highlighted: Rule,
}

/// Knowledge panel facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsideRules {
    pub facts: Rule,
    /// Text repeated inside the facts; removed from the joined output.
    pub detail: Rule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherRules {
    pub panel: Rule,
    pub c: Rule,
    pub f: Rule,
    pub precipitation: Rule,
    pub humidity: Rule,
    pub wind_metric: Rule,
    pub wind_imperial: Rule,
    pub description: Rule,
    pub warning: Rule,
    pub day: Rule,
    pub weekday: Rule,
    /// Two matches per day: metric first, imperial second.
    pub high: Rule,
    /// Two matches per day: metric first, imperial second.
    pub low: Rule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebRules {
    pub item: Rule,
    pub link: Rule,
    pub title: Rule,
    pub text: Rule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightRules {
    pub item: Rule,
    pub title: Rule,
    pub description: Rule,
    pub duration: Rule,
    pub price: Rule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LyricsRules {
    pub line: Rule,
    /// "Show more" control; its presence marks the lyrics as an excerpt.
    pub more: Rule,
    pub source: Rule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerRules {
    pub primary: Rule,
    pub fallback: Rule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsRules {
    pub item: Rule,
    pub link: Rule,
    pub title: Rule,
    pub source: Rule,
    pub date: Rule,
}

/// Translation widget.
///
/// Both field selectors are positional and break if the widget reorders its
/// nodes: `languages` must yield source then target, `fields` must yield
/// source text, source pronunciation, target text, target pronunciation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationRules {
    pub panel: Rule,
    pub languages: Rule,
    pub fields: Rule,
}

// ── Table ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorTable {
    pub snippet: SnippetRules,
    pub aside: AsideRules,
    pub weather: WeatherRules,
    pub web: WebRules,
    pub flights: FlightRules,
    pub lyrics: LyricsRules,
    pub answer: AnswerRules,
    pub news: NewsRules,
    pub translation: TranslationRules,
}

impl SelectorTable {
    /// Shared built-in table.
    pub fn builtin() -> &'static SelectorTable {
        &BUILTIN
    }

    /// Parse a JSON table. Sections and fields left out keep their built-in
    /// selectors.
    pub fn from_json(json: &str) -> Result<Self> {
        let table = serde_json::from_str(json)?;
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading selector table from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn google() -> Result<Self> {
        Ok(Self {
            snippet: SnippetRules {
                root: Rule::new(".xpdopen .hgKElc")?,
                target: Rule::new(".hgKElc")?,
                highlighted: Rule::new("b")?,
            },
            aside: AsideRules {
                facts: Rule::new(".xGj8Mb .wDYxhc")?,
                detail: Rule::new(".xGj8Mb .kno-fb-ctx")?,
            },
            weather: WeatherRules {
                panel: Rule::new("#wob_wc")?,
                c: Rule::new("#wob_tm")?,
                f: Rule::new("#wob_ttm")?,
                precipitation: Rule::new("#wob_pp")?,
                humidity: Rule::new("#wob_hm")?,
                wind_metric: Rule::new("#wob_ws")?,
                wind_imperial: Rule::new("#wob_tws")?,
                description: Rule::new("#wob_dc")?,
                warning: Rule::new(".vk_h")?,
                day: Rule::new(".wob_df")?,
                weekday: Rule::new(".Z1VzSb")?,
                high: Rule::new(".gNCp2e .wob_t")?,
                low: Rule::new(".ZXCv8e .wob_t")?,
            },
            web: WebRules {
                item: Rule::new(".N54PNb")?,
                link: Rule::new("a")?,
                title: Rule::new("h3")?,
                text: Rule::new(".VwiC3b")?,
            },
            flights: FlightRules {
                item: Rule::new(".Ww4FFb.vt6azd .wyccme")?,
                title: Rule::new(".ZhosBf")?,
                description: Rule::new(".GfzIoc")?,
                duration: Rule::new(".TM2JYd")?,
                price: Rule::new(".YK0p7d")?,
            },
            lyrics: LyricsRules {
                line: Rule::new("div[data-lyricid] span[jsname=\"YS01Ge\"]")?,
                more: Rule::new("div[data-lyricid] [jsname=\"Pa9yHf\"]")?,
                source: Rule::new("div[data-lyricid] .j04ED")?,
            },
            answer: AnswerRules {
                primary: Rule::new(".Z0LcW")?,
                fallback: Rule::new(".IZ6rdc")?,
            },
            news: NewsRules {
                item: Rule::new(".SoaBEf")?,
                link: Rule::new("a")?,
                title: Rule::new(".n0jPhd")?,
                source: Rule::new(".MgUUmf")?,
                date: Rule::new(".OSrXXb")?,
            },
            translation: TranslationRules {
                panel: Rule::new("#tw-container")?,
                languages: Rule::new(".source-language, .target-language")?,
                fields: Rule::new(".tw-ta-container .Y2IQFc")?,
            },
        })
    }
}

impl Default for SelectorTable {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

macro_rules! builtin_default {
    ($($rules:ident => $field:ident),* $(,)?) => {
        $(
            impl Default for $rules {
                fn default() -> Self {
                    BUILTIN.$field.clone()
                }
            }
        )*
    };
}

builtin_default! {
    SnippetRules => snippet,
    AsideRules => aside,
    WeatherRules => weather,
    WebRules => web,
    FlightRules => flights,
    LyricsRules => lyrics,
    AnswerRules => answer,
    NewsRules => news,
    TranslationRules => translation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_parses() {
        let table = SelectorTable::google().unwrap();
        assert_eq!(table.snippet.target.as_str(), ".hgKElc");
        assert_eq!(table.weather.panel.as_str(), "#wob_wc");
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let table = SelectorTable::from_json(r#"{ "web": { "item": ".g" } }"#).unwrap();
        assert_eq!(table.web.item.as_str(), ".g");
        assert_eq!(table.web.title.as_str(), "h3");
        assert_eq!(table.weather, SelectorTable::builtin().weather);
    }

    #[test]
    fn empty_json_is_builtin() {
        let table = SelectorTable::from_json("{}").unwrap();
        assert_eq!(&table, SelectorTable::builtin());
    }

    #[test]
    fn bad_selector_is_rejected() {
        let err = Rule::new("div[").unwrap_err();
        assert!(matches!(err, Error::Selector { ref selector, .. } if selector == "div["));

        let err = SelectorTable::from_json(r#"{ "answer": { "primary": "div[" } }"#).unwrap_err();
        assert!(matches!(err, Error::Table(_)));
        assert!(err.to_string().contains("div["));
    }

    #[test]
    fn table_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selectors.json");
        std::fs::write(&path, r#"{ "news": { "item": "article.story" } }"#).unwrap();

        let table = SelectorTable::from_path(&path).unwrap();
        assert_eq!(table.news.item.as_str(), "article.story");
        assert_eq!(table.news.title.as_str(), ".n0jPhd");
        assert_eq!(table.answer, SelectorTable::builtin().answer);
    }

    #[test]
    fn missing_table_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectorTable::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn table_serializes_as_plain_selectors() {
        let json = serde_json::to_value(SelectorTable::builtin()).unwrap();
        assert_eq!(json["answer"]["primary"], ".Z0LcW");

        let back: SelectorTable = serde_json::from_value(json).unwrap();
        assert_eq!(&back, SelectorTable::builtin());
    }
}
