//! Whitelist HTML sanitizer.
//!
//! The raw HTML comes from an untrusted export file, so sanitization is
//! mandatory and unconditional on every extraction path before content
//! reaches storage or a renderer. The sanitizer re-serializes the parsed
//! tree, keeping only a semantic-HTML whitelist: script-executing and
//! embedding elements are dropped with their entire subtree, unknown but
//! harmless elements are unwrapped (children kept), event-handler
//! attributes are removed, and URL attributes must carry a safe scheme.

use scraper::{ElementRef, Html, Selector};

/// Elements preserved by the sanitizer.
const ALLOWED_ELEMENTS: &[&str] = &[
    "a", "abbr", "article", "b", "blockquote", "br", "caption", "cite", "code", "dd", "del",
    "div", "dl", "dt", "em", "figcaption", "figure", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
    "i", "img", "ins", "kbd", "li", "mark", "ol", "p", "pre", "q", "s", "section", "small",
    "span", "strong", "sub", "sup", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "u",
    "ul",
];

/// Elements dropped together with their entire subtree. These either
/// execute or embed active content, or never render article text.
const DROPPED_ELEMENTS: &[&str] = &[
    "applet", "audio", "base", "button", "canvas", "dialog", "embed", "form", "frame",
    "frameset", "head", "iframe", "input", "link", "math", "meta", "noscript", "object",
    "script", "select", "style", "svg", "template", "textarea", "title", "video",
];

/// Void elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

/// Sanitize a full HTML document down to its safe body content.
pub fn sanitize_html(raw_html: &str) -> String {
    let document = Html::parse_document(raw_html);
    sanitize_body(&document)
}

/// Sanitize the body of an already-parsed document.
pub(crate) fn sanitize_body(document: &Html) -> String {
    let mut out = String::new();
    match select_first(document, "body") {
        Some(body) => write_children(body, &mut out),
        None => write_children(document.root_element(), &mut out),
    }
    out.trim().to_string()
}

/// Sanitize a single element subtree into markup.
pub(crate) fn sanitize_element(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    write_sanitized(el, &mut out);
    out.trim().to_string()
}

/// First element matching a selector, if the selector parses.
pub(crate) fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

/// Collect the visible text of a subtree in document order, trimmed.
///
/// Subtrees that never render text (script, style, and friends) are
/// skipped, so a page whose only payload is code-bearing elements reads
/// as empty.
pub(crate) fn visible_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    push_visible_text(el, &mut out);
    out.trim().to_string()
}

fn push_visible_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if !DROPPED_ELEMENTS.contains(&child_el.value().name()) {
                push_visible_text(child_el, out);
            }
        }
    }
}

fn write_sanitized(el: ElementRef<'_>, out: &mut String) {
    let tag = el.value().name();
    if DROPPED_ELEMENTS.contains(&tag) {
        return;
    }
    if !ALLOWED_ELEMENTS.contains(&tag) {
        // Unknown but harmless: keep the children, drop the tag itself.
        write_children(el, out);
        return;
    }

    out.push('<');
    out.push_str(tag);
    for (name, value) in el.value().attrs() {
        if keeps_attr(tag, name, value) {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            push_escaped_attr(value, out);
            out.push('"');
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&tag) {
        return;
    }
    write_children(el, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_children(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            push_escaped_text(text, out);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            write_sanitized(child_el, out);
        }
        // Comments and processing instructions are dropped.
    }
}

fn keeps_attr(tag: &str, name: &str, value: &str) -> bool {
    // Every event-handler attribute is rejected outright.
    if name.starts_with("on") {
        return false;
    }
    match (tag, name) {
        ("a", "href") => has_safe_scheme(value),
        ("img", "src") => has_safe_scheme(value),
        ("img", "alt" | "width" | "height") => true,
        ("td" | "th", "colspan" | "rowspan") => true,
        (_, "title") => true,
        _ => false,
    }
}

/// Keep relative URLs and the http/https/mailto schemes; reject everything
/// else, including scheme names obfuscated with control or whitespace
/// characters (`jav\tascript:`).
fn has_safe_scheme(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_control() && !c.is_whitespace())
        .collect();
    let lower = compact.to_ascii_lowercase();
    match lower.split_once(':') {
        Some((scheme, _)) if !scheme.contains(|c| matches!(c, '/' | '?' | '#')) => {
            matches!(scheme, "http" | "https" | "mailto")
        }
        _ => true,
    }
}

fn push_escaped_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn push_escaped_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
