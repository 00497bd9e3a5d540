//! In-process implementation of the link store.
//!
//! Keeps every link in a single map guarded by a `parking_lot` lock. Guards are
//! never held across an `.await`, so the store is safe to share between tasks.
//! Nothing is persisted; intended for tests and local runs.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::entities::{Link, NewLink, Visit};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
    closed: AtomicBool,
}

impl InMemoryLinkRepository {
    /// Opens an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.read().is_empty()
    }

    fn ensure_open(&self) -> Result<(), AppError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(AppError::store("store is closed"));
        }
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.ensure_open()?;

        let mut links = self.links.write();
        match links.entry(new_link.id) {
            Entry::Occupied(entry) => Err(AppError::Collision {
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                let link = Link::new(
                    entry.key().clone(),
                    new_link.target,
                    Visit::now().timestamp,
                    Vec::new(),
                );
                Ok(entry.insert(link).clone())
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Link, AppError> {
        self.ensure_open()?;

        self.links
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Short URL not found"))
    }

    async fn append_visit(&self, id: &str, visit: Visit) -> Result<Link, AppError> {
        self.ensure_open()?;

        let mut links = self.links.write();
        let link = links
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("Short URL not found"))?;
        link.visits.push(visit);
        Ok(link.clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.ensure_open()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }
}
