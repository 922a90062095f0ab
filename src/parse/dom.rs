//! Predicate search over a parsed `scraper` tree.
//!
//! Every query here walks descendants in document order and excludes the node it
//! starts from, so `descendants(feature, ...)` never yields the feature itself.

use scraper::{ElementRef, node::Element};

/// Elements strictly below `root`, in document order, that satisfy `pred`.
pub fn descendants<'a, P>(root: ElementRef<'a>, pred: P) -> impl Iterator<Item = ElementRef<'a>>
where
    P: Fn(&Element) -> bool,
{
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |el| pred(el.value()))
}

/// First element strictly below `root` that satisfies `pred`.
pub fn first<'a, P>(root: ElementRef<'a>, pred: P) -> Option<ElementRef<'a>>
where
    P: Fn(&Element) -> bool,
{
    descendants(root, pred).next()
}

/// Tag name match (html5ever lower-cases tag names).
pub fn is_tag(el: &Element, tag: &str) -> bool {
    el.name() == tag
}

/// `class` attribute contains `needle` anywhere, like XPath `contains(@class, ...)`.
pub fn class_contains(el: &Element, needle: &str) -> bool {
    el.attr("class").is_some_and(|c| c.contains(needle))
}

/// `class` attribute is exactly `value`.
pub fn class_is(el: &Element, value: &str) -> bool {
    el.attr("class") == Some(value)
}

pub fn id_is(el: &Element, value: &str) -> bool {
    el.attr("id") == Some(value)
}

pub fn id_starts_with(el: &Element, prefix: &str) -> bool {
    el.attr("id").is_some_and(|id| id.starts_with(prefix))
}

/// Class tokens in the order they appear in the attribute.
pub fn class_tokens<'a>(el: &'a Element) -> impl Iterator<Item = &'a str> {
    el.attr("class").unwrap_or_default().split_whitespace()
}

/// All text below `el`, concatenated and trimmed.
pub fn inner_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
