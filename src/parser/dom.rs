//! Text rendering and bounds-checked lookups over the parsed tree.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node, Selector};

/// How a node's text is rendered. Rendering is always deep: every descendant
/// text node counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions<'a> {
    pub strip: bool,
    /// Joins text nodes. When non-empty (and `strip` is set) every text node is
    /// trimmed on its own and blank nodes are skipped.
    pub separator: &'a str,
}

impl TextOptions<'static> {
    pub const RAW: Self = Self {
        strip: false,
        separator: "",
    };

    pub const TRIMMED: Self = Self {
        strip: true,
        separator: "",
    };
}

impl<'a> TextOptions<'a> {
    pub fn joined(separator: &'a str) -> Self {
        Self {
            strip: true,
            separator,
        }
    }
}

pub fn render_text(node: NodeRef<'_, Node>, opts: TextOptions<'_>) -> String {
    let pieces: Vec<&str> = node
        .descendants()
        .filter_map(|n| n.value().as_text().map(|t| &**t))
        .collect();

    if opts.separator.is_empty() {
        let text = pieces.concat();
        return if opts.strip {
            text.trim().to_string()
        } else {
            text
        };
    }

    pieces
        .into_iter()
        .map(|p| if opts.strip { p.trim() } else { p })
        .filter(|p| !opts.strip || !p.is_empty())
        .collect::<Vec<_>>()
        .join(opts.separator)
}

/// Deep, trimmed text; empty when there is no element.
pub fn text_of(el: Option<ElementRef<'_>>) -> String {
    el.map(|el| render_text(*el, TextOptions::TRIMMED))
        .unwrap_or_default()
}

/// Like [`text_of`], but blank text counts as absent.
pub fn some_text(el: Option<ElementRef<'_>>) -> Option<String> {
    Some(text_of(el)).filter(|t| !t.is_empty())
}

pub fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// The `index`-th match under `scope`, or `None` when there are fewer matches.
pub fn nth<'a>(scope: ElementRef<'a>, selector: &Selector, index: usize) -> Option<ElementRef<'a>> {
    scope.select(selector).nth(index)
}

pub fn text_at(scope: ElementRef<'_>, selector: &Selector, index: usize) -> String {
    text_of(nth(scope, selector, index))
}

pub fn attr(el: Option<ElementRef<'_>>, name: &str) -> Option<String> {
    el.and_then(|el| el.value().attr(name)).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn sel(s: &str) -> Selector {
        Selector::parse(s).unwrap()
    }

    #[test]
    fn raw_keeps_whitespace() {
        let doc = Html::parse_fragment("<div id=x>  a <b>b</b> c  </div>");
        let el = first(doc.root_element(), &sel("#x")).unwrap();
        assert_eq!(render_text(*el, TextOptions::RAW), "  a b c  ");
        assert_eq!(render_text(*el, TextOptions::TRIMMED), "a b c");
    }

    #[test]
    fn joined_trims_each_piece() {
        let doc = Html::parse_fragment("<div id=x> a <span> </span><span> b </span></div>");
        let el = first(doc.root_element(), &sel("#x")).unwrap();
        assert_eq!(render_text(*el, TextOptions::joined(" | ")), "a | b");
    }

    #[test]
    fn positional_lookup_is_bounds_checked() {
        let doc = Html::parse_fragment("<i>one</i><i>two</i>");
        let root = doc.root_element();
        assert_eq!(text_at(root, &sel("i"), 1), "two");
        assert_eq!(text_at(root, &sel("i"), 2), "");
        assert!(nth(root, &sel("i"), 5).is_none());
    }

    #[test]
    fn blank_text_is_absent() {
        let doc = Html::parse_fragment("<i> </i>");
        let root = doc.root_element();
        assert_eq!(some_text(first(root, &sel("i"))), None);
        assert_eq!(some_text(first(root, &sel("b"))), None);
        assert_eq!(attr(first(root, &sel("i")), "href"), None);
    }
}
