use scraper::Html;

use crate::parser::dom::{first, text_of};
use crate::schema::Flight;
use crate::selectors::FlightRules;

pub fn extract(doc: &Html, rules: &FlightRules) -> Vec<Flight> {
    doc.root_element()
        .select(&rules.item)
        .map(|item| Flight {
            title: text_of(first(item, &rules.title)),
            description: text_of(first(item, &rules.description)),
            duration: text_of(first(item, &rules.duration)),
            price: text_of(first(item, &rules.price)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flights_from_listing() {
        let html = concat!(
            r#"<div class="Ww4FFb vt6azd">"#,
            r#"<div class="wyccme"><span class="ZhosBf">Lufthansa</span><span class="GfzIoc">Nonstop</span>"#,
            r#"<span class="TM2JYd">1h 20m</span><span class="YK0p7d">$129</span></div>"#,
            r#"<div class="wyccme"><span class="ZhosBf">KLM</span><span class="GfzIoc">1 stop</span>"#,
            r#"<span class="TM2JYd">3h 05m</span></div>"#,
            "</div>",
            r#"<div class="wyccme"><span class="ZhosBf">Outside the listing</span></div>"#,
        );
        let flights = extract(&Html::parse_document(html), &FlightRules::default());

        assert_eq!(flights.len(), 2);
        assert_eq!(
            flights[0],
            Flight {
                title: "Lufthansa".into(),
                description: "Nonstop".into(),
                duration: "1h 20m".into(),
                price: "$129".into(),
            }
        );
        assert_eq!(flights[1].title, "KLM");
        assert_eq!(flights[1].price, "");
    }
}
