use scraper::Html;

use crate::parser::dom::{attr, first, text_of};
use crate::schema::Web;
use crate::selectors::WebRules;

pub fn extract(doc: &Html, rules: &WebRules) -> Vec<Web> {
    doc.root_element()
        .select(&rules.item)
        .map(|item| Web {
            title: text_of(first(item, &rules.title)),
            url: attr(first(item, &rules.link), "href").unwrap_or_default(),
            text: text_of(first(item, &rules.text)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, url: &str, text: &str) -> String {
        format!(
            r#"<div class="N54PNb"><a href="{}"><h3> {} </h3></a><div class="VwiC3b">{}</div></div>"#,
            url, title, text
        )
    }

    #[test]
    fn results_in_document_order() {
        let html = [
            result("Rust", "https://www.rust-lang.org/", "A language empowering everyone."),
            result("Rust (video game)", "https://rust.facepunch.com/", "Survival game."),
            result("Rust - Wikipedia", "https://en.wikipedia.org/wiki/Rust", "Iron oxide."),
        ]
        .concat();
        let web = extract(&Html::parse_document(&html), &WebRules::default());

        assert_eq!(web.len(), 3);
        assert_eq!(
            web[0],
            Web {
                title: "Rust".into(),
                url: "https://www.rust-lang.org/".into(),
                text: "A language empowering everyone.".into(),
            }
        );
        assert_eq!(web[1].url, "https://rust.facepunch.com/");
        assert_eq!(web[2].title, "Rust - Wikipedia");
        assert_eq!(web[2].text, "Iron oxide.");
    }

    #[test]
    fn missing_fields_stay_empty() {
        let web = extract(
            &Html::parse_document(r#"<div class="N54PNb"><span>bare</span></div>"#),
            &WebRules::default(),
        );
        assert_eq!(
            web,
            vec![Web {
                title: String::new(),
                url: String::new(),
                text: String::new(),
            }]
        );
    }

    #[test]
    fn no_results_is_empty() {
        assert!(extract(&Html::parse_document("<p>hi</p>"), &WebRules::default()).is_empty());
    }
}
