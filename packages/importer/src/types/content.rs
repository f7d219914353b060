//! Extraction output types.

use serde::{Deserialize, Serialize};

/// Quality indicator for an extraction result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStatus {
    /// The readability step isolated a main-content region.
    Success,

    /// The readability step missed; the result is the sanitized full
    /// page body. Still renderable, flagged for UI treatment or later
    /// re-processing.
    Partial,
}

/// Sanitized readable content produced from one raw HTML page.
///
/// Transient value: ownership passes to the caller, which persists it
/// as part of the article record. Both fields are sanitized regardless
/// of which extraction path produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedContent {
    /// Sanitized markup, safe for direct rendering
    pub content_html: String,

    /// Visible text in document order, trimmed
    pub content_text: String,

    /// Whether the readability step succeeded or the full-body fallback ran
    pub parse_status: ParseStatus,

    /// Document title if one was found
    pub title: Option<String>,
}

impl ParsedContent {
    /// Check whether this result came from the full-body fallback.
    pub fn is_partial(&self) -> bool {
        self.parse_status == ParseStatus::Partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ParseStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&ParseStatus::Partial).unwrap(),
            "\"partial\""
        );
    }

    #[test]
    fn test_is_partial() {
        let content = ParsedContent {
            content_html: "<p>x</p>".to_string(),
            content_text: "x".to_string(),
            parse_status: ParseStatus::Partial,
            title: None,
        };
        assert!(content.is_partial());
    }
}
