//! Readable-content extraction from raw article HTML.
//!
//! `extract` never fails outward: when the readability step cannot
//! isolate a main-content region, the sanitized full page body is
//! returned with `ParseStatus::Partial` instead — a raw page dump is
//! always preferable to dropping the article over a heuristic miss,
//! and the status flag lets the UI distinguish the two.

use scraper::{ElementRef, Html, Selector};

use crate::pipeline::sanitize::{sanitize_body, sanitize_element, select_first, visible_text};
use crate::types::content::{ParseStatus, ParsedContent};

/// Upper bound on the raw HTML fed to the parser. The export file is
/// untrusted; anything past this is truncated before parsing.
const MAX_HTML_BYTES: usize = 2 * 1024 * 1024;

/// Explicit content containers, checked before block scoring.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    "#content",
    "#main-content",
    ".post-content",
    ".entry-content",
    ".article-body",
];

/// Generic blocks considered by the text-mass scorer.
const CANDIDATE_SELECTOR: &str = "body section, body div, body td";

/// Score bonus per direct paragraph child of a candidate block.
const PARAGRAPH_BONUS: usize = 25;

/// Extract sanitized readable content from raw article HTML.
///
/// Pure computation, no I/O. Every input, however malformed, yields a
/// `ParsedContent`; both paths sanitize before returning.
pub fn extract(raw_html: &str) -> ParsedContent {
    let document = Html::parse_document(bound_input(raw_html));
    let title = document_title(&document);

    if let Some(region) = find_content_region(&document) {
        let content_text = visible_text(region);
        if !content_text.is_empty() {
            let content_html = sanitize_element(region);
            if !content_html.is_empty() {
                return ParsedContent {
                    content_html,
                    content_text,
                    parse_status: ParseStatus::Success,
                    title,
                };
            }
        }
    }

    // Fallback: the whole body, sanitized, so the article survives.
    let content_html = sanitize_body(&document);
    let content_text = match select_first(&document, "body") {
        Some(body) => visible_text(body),
        None => String::new(),
    };
    ParsedContent {
        content_html,
        content_text,
        parse_status: ParseStatus::Partial,
        title,
    }
}

fn bound_input(raw_html: &str) -> &str {
    if raw_html.len() <= MAX_HTML_BYTES {
        return raw_html;
    }
    let mut end = MAX_HTML_BYTES;
    while !raw_html.is_char_boundary(end) {
        end -= 1;
    }
    &raw_html[..end]
}

/// Document title: `<title>`, else the first `<h1>`.
fn document_title(document: &Html) -> Option<String> {
    ["title", "h1"].iter().find_map(|sel| {
        select_first(document, sel)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty())
    })
}

/// Heuristically identify the main content subtree.
fn find_content_region(document: &Html) -> Option<ElementRef<'_>> {
    // Explicit content containers win outright.
    for selector in CONTENT_SELECTORS {
        if let Some(el) = select_first(document, selector) {
            if !visible_text(el).is_empty() {
                return Some(el);
            }
        }
    }

    // Otherwise score generic blocks by visible-text mass, discounting
    // link text so navigation-heavy wrappers lose to body copy.
    let selector = Selector::parse(CANDIDATE_SELECTOR).ok()?;
    document
        .select(&selector)
        .filter_map(|el| content_score(el).map(|score| (score, el)))
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, el)| el)
}

fn content_score(el: ElementRef<'_>) -> Option<f64> {
    let text_len = visible_text(el).chars().count();
    if text_len == 0 {
        return None;
    }

    let link_selector = Selector::parse("a").ok()?;
    let link_len: usize = el
        .select(&link_selector)
        .map(|link| visible_text(link).chars().count())
        .sum();
    let paragraphs = el
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "p")
        .count();

    let body_copy = text_len.saturating_sub(link_len);
    if body_copy == 0 && paragraphs == 0 {
        return None;
    }
    Some((body_copy + paragraphs * PARAGRAPH_BONUS) as f64)
}
