// ABOUTME: Listing-page discovery: collects candidate posting anchors matching a source predicate.
// ABOUTME: De-duplicates by target URL preserving first-seen document order; never touches the network.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::segmenter::SEGMENT_SEPARATOR;
use crate::source::Source;

static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// All anchors on the listing page whose href passes the source predicate,
/// in document order. Matching nothing is a valid empty result, not an
/// error.
pub fn matching_anchors<'a>(doc: &'a Html, source: &Source) -> Vec<ElementRef<'a>> {
    doc.select(&ANCHOR_SELECTOR)
        .filter(|el| {
            el.value()
                .attr("href")
                .map(|href| source.matches(href.trim()))
                .unwrap_or(false)
        })
        .collect()
}

/// Unique posting URLs discovered on the listing page, first occurrence
/// wins, order preserved. Structural duplicates (several anchors to the
/// same posting) collapse to one entry.
pub fn discover_links(doc: &Html, source: &Source) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut urls = Vec::new();
    for el in matching_anchors(doc, source) {
        let href = match el.value().attr("href") {
            Some(h) => h.trim(),
            None => continue,
        };
        if href.is_empty() {
            continue;
        }
        if seen.insert(href.to_string()) {
            urls.push(href.to_string());
        }
    }
    urls
}

/// Flatten an anchor's rendered text with an explicit separator at each
/// block boundary: trimmed non-empty text nodes joined with `|`, so the
/// segmenter can split fields that the markup keeps apart.
pub fn anchor_segments(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(&SEGMENT_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_source() -> Source {
        Source {
            name: "test".to_string(),
            listing_url: "https://example.lt/karjera".to_string(),
            href_prefix: "https://example.lt/darbo/".to_string(),
            href_needle: "/darbo/".to_string(),
            strategy: crate::source::Strategy::DetailPage,
        }
    }

    #[test]
    fn discovers_matching_links_in_order() {
        let html = r#"
            <ul>
                <li><a href="https://example.lt/darbo/b">B</a></li>
                <li><a href="https://example.lt/naujienos/x">News</a></li>
                <li><a href="https://example.lt/darbo/a">A</a></li>
            </ul>
        "#;
        let doc = Html::parse_document(html);
        let urls = discover_links(&doc, &test_source());
        assert_eq!(
            urls,
            vec![
                "https://example.lt/darbo/b".to_string(),
                "https://example.lt/darbo/a".to_string()
            ]
        );
    }

    #[test]
    fn duplicate_targets_collapse_to_first() {
        let html = r#"
            <a href="https://example.lt/darbo/a"><h3>Title</h3></a>
            <a href="https://example.lt/darbo/a">Skaityti daugiau</a>
            <a href="https://example.lt/darbo/b">B</a>
        "#;
        let doc = Html::parse_document(html);
        let urls = discover_links(&doc, &test_source());
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], "https://example.lt/darbo/a");
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        let doc = Html::parse_document("<p>Šiuo metu laisvų darbo vietų nėra.</p>");
        assert!(discover_links(&doc, &test_source()).is_empty());
    }

    #[test]
    fn anchor_text_flattens_with_separator() {
        let html = r#"
            <a href="https://example.lt/darbo/a">
                <span>eso Inžinierius</span>
                <span>Vilnius</span>
                <span>Visa darbo diena</span>
            </a>
        "#;
        let doc = Html::parse_document(html);
        let anchor = matching_anchors(&doc, &test_source())[0];
        assert_eq!(anchor_segments(anchor), "eso Inžinierius|Vilnius|Visa darbo diena");
    }
}
