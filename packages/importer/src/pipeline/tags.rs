//! Tag merging - resolve free-text names into the deduplicated tag
//! catalog and link them to an article.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::error::{ImportError, Result};
use crate::traits::store::TagStore;
use crate::types::tag::{ArticleTag, Tag};

/// How many times a merge re-resolves after losing a duplicate-name race.
const MAX_MERGE_ATTEMPTS: usize = 4;

/// Resolve each name to a canonical tag row, creating missing ones, and
/// link every resolved tag to `article_id`.
///
/// Names are trimmed, empties dropped, and the rest deduplicated
/// case-sensitively; an empty result set returns without touching
/// storage. One link row is returned per distinct name.
///
/// Concurrent first-use of the same name is handled by the store's
/// uniqueness-enforcing insert: losing the creation race yields a
/// duplicate-tag rejection, after which the merge re-resolves through a
/// fresh lookup. Duplicate tag rows never survive either way.
pub async fn merge_tags<S: TagStore>(
    store: &S,
    article_id: &str,
    names: &[String],
) -> Result<Vec<ArticleTag>> {
    let names = normalize_names(names);
    if names.is_empty() {
        return Ok(Vec::new());
    }

    for attempt in 0..MAX_MERGE_ATTEMPTS {
        // 1. One batched lookup for everything already in the catalog.
        let existing = store.find_tags_by_names(&names).await?;
        let mut by_name: HashMap<String, Tag> = existing
            .into_iter()
            .map(|tag| (tag.name.clone(), tag))
            .collect();

        // 2. Batch-create whatever is missing.
        let missing: Vec<Tag> = names
            .iter()
            .filter(|name| !by_name.contains_key(*name))
            .map(|name| Tag::new(name.as_str()))
            .collect();

        if !missing.is_empty() {
            match store.insert_tags(&missing).await {
                Ok(()) => {
                    for tag in missing {
                        by_name.insert(tag.name.clone(), tag);
                    }
                }
                Err(ImportError::DuplicateTag { name }) => {
                    // A concurrent import created one of the names first.
                    debug!(attempt, name = %name, "lost tag-creation race, re-resolving");
                    continue;
                }
                Err(err) => return Err(err),
            }
        }

        // 3. One link row per name, batch-inserted.
        let links: Vec<ArticleTag> = names
            .iter()
            .filter_map(|name| by_name.get(name))
            .map(|tag| ArticleTag::new(article_id, tag.id.clone()))
            .collect();
        store.insert_article_tags(&links).await?;
        return Ok(links);
    }

    Err(ImportError::TagMergeExhausted {
        name: names.into_iter().next().unwrap_or_default(),
    })
}

/// Trim, drop empties, and dedupe case-sensitively.
fn normalize_names(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_string()))
        .map(|name| name.to_string())
        .collect()
}
