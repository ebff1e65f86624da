//! Access to the search engine holding employee documents.
//!
//! [`ElasticClient`] talks to an Elasticsearch-compatible REST API;
//! [`MemoryIndex`] keeps documents in process memory for tests.

pub mod elastic;
pub mod memory;

use async_trait::async_trait;

use crate::error::{Result, RosterError};
use crate::types::{Employee, Keyword};

pub use elastic::ElasticClient;
pub use memory::MemoryIndex;

/// Name of the engine index storing employees.
pub const INDEX_NAME: &str = "employee";

/// One engine round trip per operation, except [`IndexClient::seed`].
#[async_trait]
pub trait IndexClient: Send + Sync {
    /// Any readable response from the engine counts as healthy.
    async fn check_health(&self) -> Result<()>;

    /// Create or update the employee mapping. Succeeds whether or not the
    /// index already existed.
    async fn create_index(&self) -> Result<()>;

    async fn insert(&self, employee: &Employee) -> Result<()>;

    /// Partial update: only fields present on `employee` are changed.
    async fn update(&self, employee: &Employee) -> Result<()>;

    /// Deleting an unknown id is not an error.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Match query on `name`; records come back in engine order.
    async fn search(&self, keyword: &Keyword) -> Result<Vec<Employee>>;

    /// Insert [`Employee::seeded`] records for ids in `[id_start, n)`, one at
    /// a time. Stops at the first failure; earlier inserts are kept.
    async fn seed(&self, id_start: i64, n: i64) -> Result<()> {
        for id in id_start..n {
            self.insert(&Employee::seeded(id))
                .await
                .map_err(|e| RosterError::Seed {
                    id,
                    source: Box::new(e),
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Memory index that rejects inserts from `fail_from` onwards and keeps
    /// the default `seed`.
    struct FailingInserts {
        inner: MemoryIndex,
        fail_from: i64,
    }

    #[async_trait]
    impl IndexClient for FailingInserts {
        async fn check_health(&self) -> Result<()> {
            self.inner.check_health().await
        }

        async fn create_index(&self) -> Result<()> {
            self.inner.create_index().await
        }

        async fn insert(&self, employee: &Employee) -> Result<()> {
            if employee.id >= self.fail_from {
                return Err(RosterError::Http {
                    operation: "insert data",
                    message: "connection reset".to_string(),
                });
            }
            self.inner.insert(employee).await
        }

        async fn update(&self, employee: &Employee) -> Result<()> {
            self.inner.update(employee).await
        }

        async fn delete(&self, id: i64) -> Result<()> {
            self.inner.delete(id).await
        }

        async fn search(&self, keyword: &Keyword) -> Result<Vec<Employee>> {
            self.inner.search(keyword).await
        }
    }

    #[tokio::test]
    async fn test_seed_stops_at_first_failure_and_keeps_earlier_inserts() {
        let client = FailingInserts {
            inner: MemoryIndex::new(),
            fail_from: 3,
        };

        let err = client.seed(1, 5).await.unwrap_err();
        match err {
            RosterError::Seed { id, source } => {
                assert_eq!(id, 3);
                assert!(matches!(
                    *source,
                    RosterError::Http {
                        operation: "insert data",
                        ..
                    }
                ));
            }
            other => panic!("expected seed error, got {:?}", other),
        }

        assert_eq!(client.inner.get(1).await, Some(Employee::seeded(1)));
        assert_eq!(client.inner.get(2).await, Some(Employee::seeded(2)));
        assert_eq!(client.inner.get(3).await, None);
        assert_eq!(client.inner.get(4).await, None);
        assert_eq!(client.inner.len().await, 2);
    }
}
