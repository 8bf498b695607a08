use scraper::Html;

use crate::parser::dom::{attr, first, some_text};
use crate::schema::News;
use crate::selectors::NewsRules;

pub fn extract(doc: &Html, rules: &NewsRules) -> Vec<News> {
    doc.root_element()
        .select(&rules.item)
        .map(|item| News {
            title: some_text(first(item, &rules.title)),
            source: some_text(first(item, &rules.source)),
            // Cards are often the anchor themselves.
            url: attr(first(item, &rules.link), "href").or_else(|| attr(Some(item), "href")),
            date: some_text(first(item, &rules.date)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<News> {
        extract(&Html::parse_document(html), &NewsRules::default())
    }

    #[test]
    fn news_cards_in_order() {
        let news = run(concat!(
            r#"<div class="SoaBEf"><a href="https://example.com/a">"#,
            r#"<div class="MgUUmf">Example Times</div><div class="n0jPhd">First story</div>"#,
            r#"<div class="OSrXXb">2 hours ago</div></a></div>"#,
            r#"<div class="SoaBEf"><a href="https://example.com/b">"#,
            r#"<div class="n0jPhd">Second story</div></a></div>"#,
        ));

        assert_eq!(news.len(), 2);
        assert_eq!(
            news[0],
            News {
                title: Some("First story".into()),
                source: Some("Example Times".into()),
                url: Some("https://example.com/a".into()),
                date: Some("2 hours ago".into()),
            }
        );
        assert_eq!(news[1].title.as_deref(), Some("Second story"));
        assert_eq!(news[1].source, None);
        assert_eq!(news[1].date, None);
    }

    #[test]
    fn card_without_link_has_no_url() {
        let news = run(r#"<div class="SoaBEf"><div class="n0jPhd">Headline</div></div>"#);
        assert_eq!(news[0].url, None);
        assert_eq!(news[0].title.as_deref(), Some("Headline"));
    }
}
