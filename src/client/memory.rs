use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use super::IndexClient;
use crate::error::{Result, RosterError};
use crate::types::{Employee, Keyword};

/// In-process stand-in for the engine. No network.
///
/// Search approximates a `match` query on `name`: a record matches when any
/// lowercase whitespace-separated token of the keyword equals a token of the
/// name. Hits are returned in id order.
#[derive(Default)]
pub struct MemoryIndex {
    docs: RwLock<BTreeMap<i64, Employee>>,
    unreachable: AtomicBool,
    index_created: AtomicBool,
    search_calls: AtomicUsize,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the engine were down.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn index_created(&self) -> bool {
        self.index_created.load(Ordering::SeqCst)
    }

    pub async fn get(&self, id: i64) -> Option<Employee> {
        self.docs.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }

    fn reachable(&self, operation: &'static str) -> Result<()> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(RosterError::Http {
                operation,
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

#[async_trait]
impl IndexClient for MemoryIndex {
    async fn check_health(&self) -> Result<()> {
        self.reachable("check health")
    }

    async fn create_index(&self) -> Result<()> {
        self.reachable("create index")?;
        self.index_created.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn insert(&self, employee: &Employee) -> Result<()> {
        self.reachable("insert data")?;
        self.docs.write().await.insert(employee.id, employee.clone());
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> Result<()> {
        self.reachable("update data")?;
        // The engine rejects updates to missing documents in its response
        // body only, which callers never see.
        if let Some(existing) = self.docs.write().await.get_mut(&employee.id) {
            existing.merge(employee);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.reachable("delete data")?;
        let removed = self.docs.write().await.remove(&id);
        tracing::debug!(id, found = removed.is_some(), "delete data response");
        Ok(())
    }

    async fn search(&self, keyword: &Keyword) -> Result<Vec<Employee>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.reachable("search data")?;

        let wanted: Vec<String> = tokens(keyword.as_str()).collect();
        let docs = self.docs.read().await;
        Ok(docs
            .values()
            .filter(|e| {
                e.name
                    .as_deref()
                    .map(|name| tokens(name).any(|t| wanted.contains(&t)))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }
}
