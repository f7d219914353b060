//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{ImportError, Result};
use crate::traits::store::{JobStore, TagStore};
use crate::types::{
    job::ImportJob,
    tag::{ArticleTag, Tag},
};

/// In-memory storage for jobs, tags, and article-tag links.
///
/// Each operation takes and releases a table lock in one step, which
/// provides the atomic read-modify-write and lookup-or-create semantics
/// the traits require. Useful for testing and development; not suitable
/// for production as data is lost on restart.
pub struct MemoryStore {
    jobs: RwLock<HashMap<String, ImportJob>>,
    // Keyed by name, which enforces catalog uniqueness by construction.
    tags: RwLock<HashMap<String, Tag>>,
    article_tags: RwLock<Vec<ArticleTag>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
            tags: RwLock::new(HashMap::new()),
            article_tags: RwLock::new(Vec::new()),
        }
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.jobs.write().unwrap().clear();
        self.tags.write().unwrap().clear();
        self.article_tags.write().unwrap().clear();
    }

    /// Get the number of stored jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.read().unwrap().len()
    }

    /// Get the number of tags in the catalog.
    pub fn tag_count(&self) -> usize {
        self.tags.read().unwrap().len()
    }

    /// Get the number of article-tag link rows.
    pub fn article_tag_count(&self) -> usize {
        self.article_tags.read().unwrap().len()
    }

    /// Get all link rows for an article.
    pub fn article_tags_for(&self, article_id: &str) -> Vec<ArticleTag> {
        self.article_tags
            .read()
            .unwrap()
            .iter()
            .filter(|link| link.article_id == article_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn insert_job(&self, job: &ImportJob) -> Result<()> {
        let mut jobs = self.jobs.write().unwrap();
        if jobs.contains_key(&job.id) {
            return Err(ImportError::DuplicateJob { id: job.id.clone() });
        }
        jobs.insert(job.id.clone(), job.clone());
        Ok(())
    }

    async fn get_job(&self, id: &str) -> Result<Option<ImportJob>> {
        Ok(self.jobs.read().unwrap().get(id).cloned())
    }

    async fn modify_job(
        &self,
        id: &str,
        apply: &(dyn for<'a> Fn(&'a mut ImportJob) + Send + Sync),
    ) -> Result<Option<ImportJob>> {
        let mut jobs = self.jobs.write().unwrap();
        match jobs.get_mut(id) {
            Some(job) => {
                apply(job);
                Ok(Some(job.clone()))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl TagStore for MemoryStore {
    async fn find_tags_by_names(&self, names: &[String]) -> Result<Vec<Tag>> {
        let tags = self.tags.read().unwrap();
        Ok(names
            .iter()
            .filter_map(|name| tags.get(name))
            .cloned()
            .collect())
    }

    async fn insert_tags(&self, new_tags: &[Tag]) -> Result<()> {
        let mut tags = self.tags.write().unwrap();
        // Reject before touching anything: the insert is all-or-nothing.
        for tag in new_tags {
            if tags.contains_key(&tag.name) {
                return Err(ImportError::DuplicateTag {
                    name: tag.name.clone(),
                });
            }
        }
        for tag in new_tags {
            tags.insert(tag.name.clone(), tag.clone());
        }
        Ok(())
    }

    async fn insert_article_tags(&self, links: &[ArticleTag]) -> Result<()> {
        self.article_tags
            .write()
            .unwrap()
            .extend(links.iter().cloned());
        Ok(())
    }
}
