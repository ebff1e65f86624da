//! Role-scoped façades over an [`IndexClient`].
//!
//! Services add keyword validation and failure logging; errors are passed up
//! unchanged.

use std::sync::Arc;

use crate::client::IndexClient;
use crate::error::Result;
use crate::types::{Employee, Keyword};

#[derive(Clone)]
pub struct SearchService {
    client: Arc<dyn IndexClient>,
}

impl SearchService {
    pub fn new(client: Arc<dyn IndexClient>) -> Self {
        Self { client }
    }

    /// Validate the keyword, then search. A rejected keyword never reaches
    /// the engine.
    pub async fn search_employees(&self, raw_keyword: &str) -> Result<Vec<Employee>> {
        let keyword = Keyword::new(raw_keyword);
        if let Err(e) = keyword.validate() {
            tracing::warn!(keyword = %keyword, "found a bad keyword");
            return Err(e);
        }

        self.client.search(&keyword).await.map_err(|e| {
            tracing::error!(error = %e, "failed search employees");
            e
        })
    }
}

#[derive(Clone)]
pub struct SyncService {
    client: Arc<dyn IndexClient>,
}

impl SyncService {
    pub fn new(client: Arc<dyn IndexClient>) -> Self {
        Self { client }
    }

    pub async fn insert_employee(&self, employee: &Employee) -> Result<()> {
        self.client.insert(employee).await.map_err(|e| {
            tracing::error!(id = employee.id, error = %e, "failed insert employee");
            e
        })
    }

    pub async fn seed_employees(&self, id_start: i64, n: i64) -> Result<()> {
        self.client.seed(id_start, n).await.map_err(|e| {
            tracing::error!(id_start, n, error = %e, "failed seeding employees");
            e
        })
    }

    pub async fn update_employee(&self, employee: &Employee) -> Result<()> {
        self.client.update(employee).await.map_err(|e| {
            tracing::error!(id = employee.id, error = %e, "failed update employee");
            e
        })
    }

    pub async fn delete_employee(&self, id: i64) -> Result<()> {
        self.client.delete(id).await.map_err(|e| {
            tracing::error!(id, error = %e, "failed delete employee");
            e
        })
    }

    pub async fn check_health(&self) -> Result<()> {
        self.client.check_health().await.map_err(|e| {
            tracing::error!(error = %e, "failed do health check");
            e
        })
    }
}

#[derive(Clone)]
pub struct ConstructService {
    client: Arc<dyn IndexClient>,
}

impl ConstructService {
    pub fn new(client: Arc<dyn IndexClient>) -> Self {
        Self { client }
    }

    pub async fn create_index(&self) -> Result<()> {
        self.client.create_index().await.map_err(|e| {
            tracing::error!(error = %e, "failed create index");
            e
        })
    }
}
