//! Tag catalog types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical tag catalog entry.
///
/// Created lazily on first use of a name, never duplicated for the same
/// name, and never mutated by the import pipeline after creation. Names
/// are case-sensitive, trimmed, and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Opaque unique identifier
    pub id: String,

    /// Unique, case-sensitive tag name
    pub name: String,

    /// When the tag was first created
    pub created_at: DateTime<Utc>,
}

impl Tag {
    /// Create a new tag for a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// Link row associating an article with a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleTag {
    /// Opaque unique identifier
    pub id: String,

    /// The linked article
    pub article_id: String,

    /// The linked tag
    pub tag_id: String,
}

impl ArticleTag {
    /// Create a new article-tag link.
    pub fn new(article_id: impl Into<String>, tag_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            article_id: article_id.into(),
            tag_id: tag_id.into(),
        }
    }
}
