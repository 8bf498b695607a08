//! HTML subtree → Markdown.
//!
//! The subtree is copied node by node into a private tree and rewritten in
//! place: each formatting element is swapped for a text node carrying its
//! Markdown form, then the whole tree is flattened to text. Step order matters,
//! later steps read text produced by earlier ones (a link around bold text
//! renders as `[**x**](..)`).

use std::sync::LazyLock;

use ego_tree::{NodeId, NodeMut, NodeRef, Tree};
use regex::Regex;
use scraper::node::Text;
use scraper::{ElementRef, Html, Node, Selector};

use super::dom::{render_text, TextOptions};

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Render the element matched by `target` inside `html` as Markdown.
///
/// `html` is usually the outer HTML of an element from a larger document and
/// `target` a selector matching that element on its own. Returns an empty
/// string when nothing matches.
pub fn to_markdown(html: &str, target: &Selector) -> String {
    // Table parts (`td`, `tr`, ...) are dropped when parsed on their own.
    for markup in [html.to_string(), format!("<table>{html}</table>")] {
        let fragment = Html::parse_fragment(&markup);
        if let Some(el) = fragment.select(target).next() {
            return element_to_markdown(el);
        }
    }
    String::new()
}

/// Render `el` and its subtree as Markdown. The source document is not
/// modified.
pub fn element_to_markdown(el: ElementRef<'_>) -> String {
    let mut tree = Tree::new(Node::Fragment);
    let root = {
        let mut top = tree.root_mut();
        let mut copy = top.append(Node::Element(el.value().clone()));
        copy_children(&mut copy, *el);
        copy.id()
    };
    convert(&mut tree, root)
}

fn copy_children(dst: &mut NodeMut<'_, Node>, src: NodeRef<'_, Node>) {
    for child in src.children() {
        let mut copy = dst.append(child.value().clone());
        copy_children(&mut copy, child);
    }
}

fn convert(tree: &mut Tree<Node>, root: NodeId) -> String {
    merge_text_nodes(tree, root);
    replace_headings(tree, root);

    for id in elements(tree, root, |name| name == "img") {
        replace_with(tree, id, "");
    }
    for id in elements(tree, root, |name| name == "b") {
        let bold = format!("**{}**", text(tree, id));
        replace_with(tree, id, &bold);
    }
    for id in elements(tree, root, |name| name == "br") {
        replace_with(tree, id, "\n\n");
    }
    for id in elements(tree, root, |name| name == "p") {
        unwrap(tree, id);
    }
    for id in elements(tree, root, |name| name == "a") {
        let href = tree
            .get(id)
            .and_then(|node| node.value().as_element())
            .and_then(|el| el.attr("href"))
            .unwrap_or("/")
            .to_string();
        let link = format!("[{}]({})", text(tree, id), href);
        replace_with(tree, id, &link);
    }
    replace_lists(tree, root);

    unwrap(tree, root);
    let flat = render_text(tree.root(), TextOptions::RAW);
    BLANK_RUNS.replace_all(&flat, "\n\n").trim().to_string()
}

/// `h1`..`h6` → `#`..`######`.
fn heading_level(name: &str) -> Option<usize> {
    let level = name.strip_prefix('h')?.parse::<usize>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

fn replace_headings(tree: &mut Tree<Node>, root: NodeId) {
    for id in elements(tree, root, |name| heading_level(name).is_some()) {
        let level = tree
            .get(id)
            .and_then(|node| node.value().as_element())
            .and_then(|el| heading_level(el.name()))
            .unwrap_or(1);
        let heading = format!("{} {}", "#".repeat(level), text(tree, id));
        replace_with(tree, id, &heading);
    }
}

/// Lists are handled innermost first so a nested list is already text inside
/// its parent item by the time the parent renders.
fn replace_lists(tree: &mut Tree<Node>, root: NodeId) {
    let lists = elements(tree, root, |name| name == "ul" || name == "ol");
    for id in lists.into_iter().rev() {
        let Some(list) = tree.get(id) else { continue };
        let ordered = list
            .value()
            .as_element()
            .is_some_and(|el| el.name() == "ol");

        let lines: Vec<String> = list
            .descendants()
            .filter(|n| n.value().as_element().is_some_and(|el| el.name() == "li"))
            .enumerate()
            .map(|(i, li)| {
                let item = render_text(li, TextOptions::TRIMMED);
                if ordered {
                    format!("{}. {}", i + 1, item)
                } else {
                    format!("- {}", item)
                }
            })
            .collect();

        replace_with(tree, id, &lines.join("\n"));
    }
}

// ── Tree edits ──

/// Element descendants of `root` (excluding `root`) in document order.
fn elements(tree: &Tree<Node>, root: NodeId, wanted: impl Fn(&str) -> bool) -> Vec<NodeId> {
    let Some(root) = tree.get(root) else {
        return Vec::new();
    };
    root.descendants()
        .skip(1)
        .filter(|n| n.value().as_element().is_some_and(|el| wanted(el.name())))
        .map(|n| n.id())
        .collect()
}

fn text(tree: &Tree<Node>, id: NodeId) -> String {
    tree.get(id)
        .map(|node| render_text(node, TextOptions::RAW))
        .unwrap_or_default()
}

fn has_parent(tree: &Tree<Node>, id: NodeId) -> bool {
    tree.get(id).and_then(|node| node.parent()).is_some()
}

fn replace_with(tree: &mut Tree<Node>, id: NodeId, text: &str) {
    if !has_parent(tree, id) {
        return;
    }
    if let Some(mut node) = tree.get_mut(id) {
        node.insert_before(Node::Text(Text { text: text.into() }));
        node.detach();
    }
}

/// Move the children of `id` in front of it, then drop `id`.
fn unwrap(tree: &mut Tree<Node>, id: NodeId) {
    if !has_parent(tree, id) {
        return;
    }
    let children: Vec<NodeId> = tree
        .get(id)
        .map(|node| node.children().map(|c| c.id()).collect())
        .unwrap_or_default();
    let Some(mut node) = tree.get_mut(id) else { return };
    for child in children {
        node.insert_id_before(child);
    }
    node.detach();
}

/// Collapse runs of sibling text nodes into the first node of each run.
fn merge_text_nodes(tree: &mut Tree<Node>, root: NodeId) {
    let parents: Vec<NodeId> = tree
        .get(root)
        .map(|node| node.descendants().map(|n| n.id()).collect())
        .unwrap_or_default();

    for parent in parents {
        let children: Vec<NodeId> = tree
            .get(parent)
            .map(|node| node.children().map(|c| c.id()).collect())
            .unwrap_or_default();

        let mut head: Option<NodeId> = None;
        for child in children {
            let tail = tree
                .get(child)
                .and_then(|node| node.value().as_text())
                .map(|t| t.text.to_string());

            match (head, tail) {
                (Some(head_id), Some(tail)) => {
                    if let Some(mut node) = tree.get_mut(head_id) {
                        if let Node::Text(t) = node.value() {
                            t.text.push_slice(&tail);
                        }
                    }
                    if let Some(mut node) = tree.get_mut(child) {
                        node.detach();
                    }
                }
                (None, Some(_)) => head = Some(child),
                (_, None) => head = None,
            }
        }
    }
}
