//! User Routes
//!
//! The user roster, fetched from the VersoZap backend on every request
//! (sample data when the backend is down) and filtered in memory.
//!
//! - GET /api/v1/users - Filtered roster with roster-wide stats
//! - DELETE /api/v1/users/:id - Delete a user (logged stub)

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{DeleteUserResponse, UserListParams, UserListResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::domain::{filter_users, user_stats, StatusFilter, UserQuery};

/// GET /api/v1/users
///
/// Fetch the roster and apply the criteria. Stats always describe the full
/// roster so the page cards stay stable while filtering.
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserListParams>,
) -> ApiResult<Json<UserListResponse>> {
    let query = parse_user_query(&params)?;

    let roster = state.backend.fetch_users_or_fallback().await;
    let stats = user_stats(&roster);
    let users = filter_users(roster, &query);

    Ok(Json(UserListResponse {
        total: users.len(),
        users,
        stats,
    }))
}

/// DELETE /api/v1/users/:id
///
/// Deletion is not wired to the backend yet; the request is acknowledged
/// and logged so the dashboard flow keeps working.
pub async fn delete_user(
    State(_state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<DeleteUserResponse>> {
    tracing::info!(user_id = id, "User delete requested but not implemented");

    Ok(Json(DeleteUserResponse { success: true }))
}

/// Turn query parameters into filter criteria
pub(crate) fn parse_user_query(params: &UserListParams) -> ApiResult<UserQuery> {
    let status = match params.status.as_deref() {
        None => StatusFilter::All,
        Some(s) => parse_status(s)?,
    };

    Ok(UserQuery {
        search: params.search.clone(),
        status,
    })
}

/// Parse a status selection
fn parse_status(s: &str) -> ApiResult<StatusFilter> {
    match s.to_lowercase().as_str() {
        "" | "all" => Ok(StatusFilter::All),
        "active" => Ok(StatusFilter::Active),
        "inactive" => Ok(StatusFilter::Inactive),
        _ => Err(ApiError::Validation(format!(
            "Invalid status: {}. Use all, active, or inactive",
            s
        ))),
    }
}
