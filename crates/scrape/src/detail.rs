// ABOUTME: Detail-page field extraction: mines title, location, salary, department, remote flag
// ABOUTME: and description from a posting's page via independent per-field fallback chains.

//! Detail-page extraction.
//!
//! Every field is resolved through its own ordered chain of strategies,
//! evaluated by [`first_of`]: the first strategy returning a non-empty
//! value wins, and a chain that exhausts leaves the field absent. Field
//! resolutions are independent; one field coming up empty never blocks the
//! others.
//!
//! Key behaviors:
//! - Location tier (a) scans the page text in *gazetteer order*, so ties
//!   between cities are broken by gazetteer precedence, not text position.
//! - Description fragments follow the label's parent to its pre-order
//!   successor element, mirroring how the postings nest their sections.

use ego_tree::NodeId;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::gazetteer::{
    CITIES, CITY_SLUG_MAP, CITY_SLUG_RE, DEPARTMENT_FALLBACK_RE, DEPARTMENT_RE,
    DESCRIPTION_HEADINGS, REMOTE_MARKERS, SALARY_RE, WORK_TYPE_RE,
};
use crate::record::JobRecord;

/// Marker class the posting pages put on their title heading.
static JOB_TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1.job-title").unwrap());
static H1_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());

/// Maximum length (in characters) of one description fragment.
const DESCRIPTION_MAX_CHARS: usize = 150;
/// Fragments at or below this length are navigation crumbs, not content.
const DESCRIPTION_MIN_CHARS: usize = 20;
/// Separator joining collected description fragments.
const DESCRIPTION_JOIN: &str = " | ";

/// Everything a field strategy may consult: the parsed document, its
/// flattened text, and the posting URL.
pub struct DetailCx<'a> {
    pub doc: &'a Html,
    pub text: &'a str,
    pub url: &'a str,
}

/// One tier in a field's fallback chain.
pub type Strategy = fn(&DetailCx) -> Option<String>;

/// Evaluate a fallback chain: first tier producing a non-empty value wins.
fn first_of(cx: &DetailCx, tiers: &[Strategy]) -> Option<String> {
    tiers
        .iter()
        .find_map(|tier| tier(cx).filter(|v| !v.is_empty()))
}

const TITLE_TIERS: &[Strategy] = &[title_from_job_heading, title_from_any_heading];
const LOCATION_TIERS: &[Strategy] = &[location_from_gazetteer, location_from_url_slug];
const DEPARTMENT_TIERS: &[Strategy] = &[department_labeled, department_loose];
const WORK_TYPE_TIERS: &[Strategy] = &[work_type_from_text];
const SALARY_TIERS: &[Strategy] = &[salary_from_text];

/// Extract all fields from a fetched detail page.
pub fn extract_detail(html: &str, url: &str) -> JobRecord {
    let doc = Html::parse_document(html);
    let text: String = doc.root_element().text().collect();
    let cx = DetailCx {
        doc: &doc,
        text: &text,
        url,
    };

    JobRecord {
        url: url.to_string(),
        title: first_of(&cx, TITLE_TIERS).unwrap_or_default(),
        company_tag: None,
        location: first_of(&cx, LOCATION_TIERS),
        work_type: first_of(&cx, WORK_TYPE_TIERS),
        salary: first_of(&cx, SALARY_TIERS),
        department: first_of(&cx, DEPARTMENT_TIERS),
        remote_work: remote_flag(&text),
        description: description_sections(&doc),
    }
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_text(el: ElementRef<'_>) -> String {
    normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "))
}

fn title_from_job_heading(cx: &DetailCx) -> Option<String> {
    cx.doc
        .select(&JOB_TITLE_SELECTOR)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
}

fn title_from_any_heading(cx: &DetailCx) -> Option<String> {
    cx.doc
        .select(&H1_SELECTOR)
        .map(element_text)
        .find(|t| !t.is_empty())
}

fn work_type_from_text(cx: &DetailCx) -> Option<String> {
    WORK_TYPE_RE
        .captures(cx.text)
        .map(|c| c[1].to_string())
}

fn department_labeled(cx: &DetailCx) -> Option<String> {
    DEPARTMENT_RE
        .captures(cx.text)
        .map(|c| c[1].trim().to_string())
}

fn department_loose(cx: &DetailCx) -> Option<String> {
    DEPARTMENT_FALLBACK_RE
        .captures(cx.text)
        .map(|c| c[1].trim().to_string())
}

/// Tier (a): first gazetteer city present anywhere in the page text, in
/// gazetteer list order. Precedence comes from the list, not from where in
/// the text a city first appears.
fn location_from_gazetteer(cx: &DetailCx) -> Option<String> {
    CITIES
        .iter()
        .find(|city| cx.text.contains(**city))
        .map(|city| city.to_string())
}

/// Tier (b): locative city slug in the posting URL, mapped through the
/// slug table, with a capitalized best-effort fallback for unmapped slugs.
fn location_from_url_slug(cx: &DetailCx) -> Option<String> {
    let lowered = cx.url.to_lowercase();
    let caps = CITY_SLUG_RE.captures(&lowered)?;
    let slug = caps.get(1)?.as_str();
    match CITY_SLUG_MAP.get(slug) {
        Some(city) => Some((*city).to_string()),
        None => Some(capitalize(slug)),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn salary_from_text(cx: &DetailCx) -> Option<String> {
    SALARY_RE
        .captures(cx.text)
        .map(|c| c[1].trim().to_string())
}

fn remote_flag(text: &str) -> bool {
    let lowered = text.to_lowercase();
    REMOTE_MARKERS.iter().any(|m| lowered.contains(m))
}

/// Compose the description from the fixed section headings: for each label
/// find the first text node equal to it, take the pre-order successor
/// element of the node's parent, and keep its text when long enough,
/// truncated to the fragment cap.
fn description_sections(doc: &Html) -> Option<String> {
    let mut fragments = Vec::new();

    for label in DESCRIPTION_HEADINGS {
        let Some(section) = section_fragment(doc, label) else {
            continue;
        };
        if section.chars().count() > DESCRIPTION_MIN_CHARS {
            fragments.push(section.chars().take(DESCRIPTION_MAX_CHARS).collect::<String>());
        }
    }

    if fragments.is_empty() {
        None
    } else {
        Some(fragments.join(DESCRIPTION_JOIN))
    }
}

/// Text of the element following the labelled heading, or None when the
/// label is absent from the page.
fn section_fragment(doc: &Html, label: &str) -> Option<String> {
    for node in doc.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        if text.trim() != label {
            continue;
        }
        let Some(parent) = node.parent() else {
            continue;
        };
        if let Some(next) = next_element_after(doc, parent.id()) {
            let fragment: String = next
                .text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect();
            return Some(fragment);
        }
        return None;
    }
    None
}

/// First element node strictly after `after` in pre-order document order.
/// The marker's own descendants come first, then its following siblings.
fn next_element_after(doc: &Html, after: NodeId) -> Option<ElementRef<'_>> {
    let mut passed = false;
    for node in doc.tree.root().descendants() {
        if passed {
            if let Some(el) = ElementRef::wrap(node) {
                return Some(el);
            }
        } else if node.id() == after {
            passed = true;
        }
    }
    None
}
