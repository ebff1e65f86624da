use axum::{
    extract::{RawQuery, State},
    Json,
};
use roster::{Employee, RosterError};
use std::sync::Arc;

use super::AppState;
use crate::dto::SearchParams;

/// Search employees by name
#[utoipa::path(
    get,
    path = "/search",
    tag = "employees",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching employees in engine order", body = Vec<Employee>),
        (status = 500, description = "Bad keyword or engine failure")
    )
)]
pub async fn search_employees(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<Employee>>, RosterError> {
    let params = SearchParams::from_raw_query(query.as_deref());
    let employees = state.search.search_employees(&params.keyword).await?;
    Ok(Json(employees))
}
