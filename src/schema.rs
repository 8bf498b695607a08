use serde::{Deserialize, Serialize};

/// Everything extracted from one results page. Every section is optional on
/// its own; a missing section never affects the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub snippet: Option<Snippet>,
    pub aside: Option<Aside>,
    pub weather: Option<WeatherForecast>,
    pub web: Vec<Web>,
    pub flights: Vec<Flight>,
    pub lyrics: Option<Lyrics>,
    pub answer: Option<Answer>,
    pub news: Vec<News>,
    pub translation: Option<Translation>,
}

impl SearchResult {
    /// True when no section matched at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ── Snippet / aside ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Markdown rendering of the featured block.
    pub text: String,
    pub highlighted: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aside {
    pub text: String,
}

// ── Weather ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialWeatherForReport {
    pub weekday: String,
    pub high_c: String,
    pub high_f: String,
    pub low_c: String,
    pub low_f: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    pub c: String,
    pub f: String,
    pub precipitation: String,
    pub humidity: String,
    pub wind_metric: String,
    pub wind_imperial: String,
    pub description: String,
    pub forecast: Vec<PartialWeatherForReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub now: Weather,
    pub warning: Option<String>,
}

// ── Result lists ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Web {
    pub title: String,
    pub url: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub title: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub date: Option<String>,
}

// ── Direct answers ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lyrics {
    /// One lyric line per text line.
    pub text: String,
    /// The page only shows an excerpt behind a "show more" control.
    pub is_partial: bool,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSide {
    pub language: String,
    pub text: String,
    pub pronunciation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub source: TranslationSide,
    pub target: TranslationSide,
}
