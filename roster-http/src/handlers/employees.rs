use axum::{
    extract::{RawQuery, State},
    Json,
};
use bytes::Bytes;
use roster::{Employee, RosterError};
use std::sync::Arc;

use super::AppState;
use crate::dto::DeleteParams;

/// Malformed or empty bodies become the default record (id 0) instead of a
/// 400, matching what existing clients rely on.
fn decode_employee(body: &Bytes) -> Employee {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "undecodable employee body, using empty record");
        Employee::default()
    })
}

/// Insert or replace an employee
#[utoipa::path(
    post,
    path = "/insert",
    tag = "employees",
    request_body = Employee,
    responses(
        (status = 200, description = "Stored employee, as decoded", body = Employee),
        (status = 500, description = "Engine failure")
    )
)]
pub async fn insert_employee(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Employee>, RosterError> {
    let employee = decode_employee(&body);
    state.sync.insert_employee(&employee).await?;
    Ok(Json(employee))
}

/// Partially update an employee
#[utoipa::path(
    post,
    path = "/update",
    tag = "employees",
    request_body = Employee,
    responses(
        (status = 200, description = "Fields sent for update, as decoded", body = Employee),
        (status = 500, description = "Engine failure")
    )
)]
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Employee>, RosterError> {
    let employee = decode_employee(&body);
    state.sync.update_employee(&employee).await?;
    Ok(Json(employee))
}

/// Delete an employee
#[utoipa::path(
    get,
    path = "/delete",
    tag = "employees",
    params(DeleteParams),
    responses(
        (status = 200, description = "Id that was deleted", body = Employee),
        (status = 500, description = "Engine failure")
    )
)]
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Employee>, RosterError> {
    let id = DeleteParams::from_raw_query(query.as_deref()).id_or_zero();
    state.sync.delete_employee(id).await?;
    Ok(Json(Employee::new(id)))
}
