use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Deserialize;

use super::{IndexClient, INDEX_NAME};
use crate::config::EngineConfig;
use crate::error::{Result, RosterError};
use crate::types::{Employee, Keyword};

/// HTTP client for an Elasticsearch-compatible engine.
///
/// Engine status codes are not inspected: a response that can be read counts
/// as success, and a failed search with an error body decodes to no hits.
pub struct ElasticClient {
    base_url: String,
    http_client: reqwest::Client,
}

// Search response envelope: {"hits": {"hits": [{"_source": {...}}]}}
#[derive(Debug, Default, Deserialize)]
struct SearchHits {
    #[serde(default)]
    hits: Hits,
}

#[derive(Debug, Default, Deserialize)]
struct Hits {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: Option<Employee>,
}

impl ElasticClient {
    pub fn new(config: &EngineConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: config.base_url.clone(),
            http_client,
        }
    }

    fn doc_url(&self, id: i64) -> String {
        format!("{}/{}/_doc/{}", self.base_url, INDEX_NAME, id)
    }

    /// Build, send and read one request. Each stage reports its own error.
    async fn call(
        &self,
        operation: &'static str,
        method: Method,
        url: String,
        body: Option<Vec<u8>>,
    ) -> Result<String> {
        let mut builder = self
            .http_client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let request = builder.build().map_err(|e| RosterError::BuildRequest {
            operation,
            message: e.to_string(),
        })?;

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| RosterError::Http {
                operation,
                message: e.to_string(),
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RosterError::ReadResponse {
                operation,
                message: e.to_string(),
            })?;

        tracing::trace!(operation, %url, %status, "engine responded");
        Ok(text)
    }

    fn encode<T: serde::Serialize>(operation: &'static str, value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| RosterError::BuildRequest {
            operation,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl IndexClient for ElasticClient {
    async fn check_health(&self) -> Result<()> {
        self.call("check health", Method::GET, self.base_url.clone(), None)
            .await?;
        Ok(())
    }

    async fn create_index(&self) -> Result<()> {
        let mapping = serde_json::json!({
            "mappings": {
                "properties": {
                    "id": { "type": "integer" },
                    "name": { "type": "text" },
                    "address": { "type": "text" },
                    "salary": { "type": "float" }
                }
            }
        });
        let body = Self::encode("create index", &mapping)?;
        let url = format!("{}/{}", self.base_url, INDEX_NAME);
        self.call("create index", Method::PUT, url, Some(body)).await?;
        Ok(())
    }

    async fn insert(&self, employee: &Employee) -> Result<()> {
        let body = Self::encode("insert data", employee)?;
        let url = self.doc_url(employee.id);
        self.call("insert data", Method::PUT, url, Some(body)).await?;
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> Result<()> {
        let body = Self::encode("update data", &serde_json::json!({ "doc": employee }))?;
        let url = format!("{}/{}/_update/{}", self.base_url, INDEX_NAME, employee.id);
        self.call("update data", Method::POST, url, Some(body)).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let response = self
            .call("delete data", Method::DELETE, self.doc_url(id), None)
            .await?;
        tracing::debug!(id, response = %response, "delete data response");
        Ok(())
    }

    async fn search(&self, keyword: &Keyword) -> Result<Vec<Employee>> {
        // The keyword goes in as a JSON string value, never spliced into the body.
        let query = serde_json::json!({
            "query": {
                "match": {
                    "name": keyword.as_str()
                }
            }
        });
        let body = Self::encode("search data", &query)?;
        let url = format!("{}/{}/_search", self.base_url, INDEX_NAME);
        let response = self
            .call("search data", Method::GET, url, Some(body))
            .await?;

        let hits: SearchHits =
            serde_json::from_str(&response).map_err(|e| RosterError::Decode {
                operation: "search data",
                message: e.to_string(),
            })?;

        Ok(hits
            .hits
            .hits
            .into_iter()
            .filter_map(|hit| hit.source)
            .collect())
    }
}
