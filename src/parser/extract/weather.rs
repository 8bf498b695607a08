use scraper::{ElementRef, Html};
use tracing::debug;

use crate::parser::dom::{first, some_text, text_at, text_of};
use crate::schema::{PartialWeatherForReport, Weather, WeatherForecast};
use crate::selectors::WeatherRules;

const METRIC: usize = 0;
const IMPERIAL: usize = 1;

pub fn extract(doc: &Html, rules: &WeatherRules) -> Option<WeatherForecast> {
    let Some(panel) = first(doc.root_element(), &rules.panel) else {
        debug!("No weather panel");
        return None;
    };

    let forecast: Vec<_> = panel
        .select(&rules.day)
        .map(|day| forecast_day(day, rules))
        .collect();

    Some(WeatherForecast {
        now: Weather {
            c: text_of(first(panel, &rules.c)),
            f: text_of(first(panel, &rules.f)),
            precipitation: text_of(first(panel, &rules.precipitation)),
            humidity: text_of(first(panel, &rules.humidity)),
            wind_metric: text_of(first(panel, &rules.wind_metric)),
            wind_imperial: text_of(first(panel, &rules.wind_imperial)),
            description: text_of(first(panel, &rules.description)),
            forecast,
        },
        warning: some_text(first(panel, &rules.warning)),
    })
}

/// High and low each come as a metric/imperial pair; a missing half is left
/// empty.
fn forecast_day(day: ElementRef<'_>, rules: &WeatherRules) -> PartialWeatherForReport {
    PartialWeatherForReport {
        weekday: text_of(first(day, &rules.weekday)),
        high_c: text_at(day, &rules.high, METRIC),
        high_f: text_at(day, &rules.high, IMPERIAL),
        low_c: text_at(day, &rules.low, METRIC),
        low_f: text_at(day, &rules.low, IMPERIAL),
    }
}
