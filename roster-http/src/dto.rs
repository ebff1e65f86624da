use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// First value of `key` in a raw query string. Repeated keys and bad
/// percent-encoding never fail the request.
pub fn first_query_value(raw: Option<&str>, key: &str) -> Option<String> {
    url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Text matched against employee names. Missing means empty.
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteParams {
    /// Employee id. Anything that is not an integer deletes id 0.
    pub id: Option<String>,
}

impl SearchParams {
    pub fn from_raw_query(raw: Option<&str>) -> Self {
        Self {
            keyword: first_query_value(raw, "keyword").unwrap_or_default(),
        }
    }
}

impl DeleteParams {
    pub fn from_raw_query(raw: Option<&str>) -> Self {
        Self {
            id: first_query_value(raw, "id"),
        }
    }

    pub fn id_or_zero(&self) -> i64 {
        self.id
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}
