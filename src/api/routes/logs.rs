//! Log Routes
//!
//! System log feed with in-memory filtering and breakdowns.
//!
//! - GET /api/v1/logs - Filtered log list with feed-wide stats
//! - GET /api/v1/logs/stats - Level/category breakdown only

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{LogListParams, LogListResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::domain::{filter_logs, log_stats, LogCategory, LogLevel, LogQuery, LogStats};

/// GET /api/v1/logs
///
/// Apply the criteria to the feed. Stats always describe the full feed so
/// the level cards stay stable while filtering.
pub async fn list_logs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LogListParams>,
) -> ApiResult<Json<LogListResponse>> {
    let query = parse_log_query(&params)?;

    let stats = log_stats(&state.logs);
    let logs = filter_logs(state.logs.as_ref().clone(), &query);

    Ok(Json(LogListResponse {
        total: logs.len(),
        logs,
        stats,
    }))
}

/// GET /api/v1/logs/stats
///
/// Feed-wide breakdown by level and category, zero counts included.
pub async fn get_log_stats(State(state): State<Arc<AppState>>) -> Json<LogStats> {
    Json(log_stats(&state.logs))
}

/// Turn query parameters into filter criteria
pub(crate) fn parse_log_query(params: &LogListParams) -> ApiResult<LogQuery> {
    let level = match params.level.as_deref() {
        None => None,
        Some(s) => parse_level(s)?,
    };
    let category = match params.category.as_deref() {
        None => None,
        Some(s) => parse_category(s)?,
    };

    Ok(LogQuery {
        search: params.search.clone(),
        level,
        category,
    })
}

/// Parse a level selection; "all" means no restriction
fn parse_level(s: &str) -> ApiResult<Option<LogLevel>> {
    match s.to_uppercase().as_str() {
        "" | "ALL" => Ok(None),
        "INFO" => Ok(Some(LogLevel::Info)),
        "SUCCESS" => Ok(Some(LogLevel::Success)),
        "WARNING" => Ok(Some(LogLevel::Warning)),
        "ERROR" => Ok(Some(LogLevel::Error)),
        _ => Err(ApiError::Validation(format!(
            "Invalid level: {}. Use INFO, SUCCESS, WARNING, or ERROR",
            s
        ))),
    }
}

/// Parse a category selection; "all" means no restriction
fn parse_category(s: &str) -> ApiResult<Option<LogCategory>> {
    match s.to_uppercase().as_str() {
        "" | "ALL" => Ok(None),
        "AUTH" => Ok(Some(LogCategory::Auth)),
        "MESSAGE" => Ok(Some(LogCategory::Message)),
        "WHATSAPP" => Ok(Some(LogCategory::Whatsapp)),
        "BIBLE" => Ok(Some(LogCategory::Bible)),
        "SYSTEM" => Ok(Some(LogCategory::System)),
        "USER" => Ok(Some(LogCategory::User)),
        _ => Err(ApiError::Validation(format!(
            "Invalid category: {}. Use AUTH, MESSAGE, WHATSAPP, BIBLE, SYSTEM, or USER",
            s
        ))),
    }
}
