//! Export Routes
//!
//! CSV downloads behind the dashboard's export buttons. Both endpoints
//! accept the same criteria as their list counterparts, so what is exported
//! is exactly what is on screen.
//!
//! - GET /api/v1/users/export - Roster as CSV
//! - GET /api/v1/logs/export - Log feed as CSV

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::{LogListParams, UserListParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::{logs::parse_log_query, users::parse_user_query};
use crate::api::state::AppState;
use crate::domain::{filter_logs, filter_users, LogEntry, User};

/// GET /api/v1/users/export
pub async fn export_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserListParams>,
) -> ApiResult<Response> {
    ensure_export_enabled(&state)?;

    let query = parse_user_query(&params)?;
    let roster = state.backend.fetch_users_or_fallback().await;
    let users = filter_users(roster, &query);

    let csv = users_csv(&users)?;
    Ok(csv_download(csv, "usuarios"))
}

/// GET /api/v1/logs/export
pub async fn export_logs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LogListParams>,
) -> ApiResult<Response> {
    ensure_export_enabled(&state)?;

    let query = parse_log_query(&params)?;
    let logs = filter_logs(state.logs.as_ref().clone(), &query);

    let csv = logs_csv(&logs)?;
    Ok(csv_download(csv, "logs"))
}

fn ensure_export_enabled(state: &AppState) -> ApiResult<()> {
    if !state.config.enable_export {
        return Err(ApiError::Validation(
            "Export feature is disabled".to_string(),
        ));
    }
    Ok(())
}

/// Format users as CSV, backend field names in the header
fn users_csv(users: &[User]) -> ApiResult<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer
        .write_record([
            "id",
            "nome",
            "email",
            "telefone",
            "versao_biblia",
            "plano_leitura",
            "horario_envio",
            "status",
        ])
        .map_err(csv_error)?;

    for user in users {
        writer
            .write_record([
                user.id.to_string(),
                user.name.clone().unwrap_or_default(),
                user.email.clone().unwrap_or_default(),
                user.phone.clone().unwrap_or_default(),
                user.bible_version.clone().unwrap_or_default(),
                user.reading_plan.to_string(),
                user.send_time.clone().unwrap_or_default(),
                if user.is_active() { "ativo" } else { "inativo" }.to_string(),
            ])
            .map_err(csv_error)?;
    }

    finish_csv(writer)
}

/// Format log entries as CSV, details flattened to JSON
fn logs_csv(logs: &[LogEntry]) -> ApiResult<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer
        .write_record(["id", "timestamp", "level", "category", "message", "details"])
        .map_err(csv_error)?;

    for entry in logs {
        let details = serde_json::to_string(&entry.details).unwrap_or_default();

        writer
            .write_record([
                entry.id.to_string(),
                entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                entry.level.to_string(),
                entry.category.to_string(),
                entry.message.clone(),
                details,
            ])
            .map_err(csv_error)?;
    }

    finish_csv(writer)
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> ApiResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ApiError::Internal(format!("CSV flush failed: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| ApiError::Internal(format!("CSV encoding failed: {}", e)))
}

fn csv_error(e: csv::Error) -> ApiError {
    ApiError::Internal(format!("CSV write failed: {}", e))
}

/// Wrap CSV content as an attachment download
fn csv_download(csv: String, prefix: &str) -> Response {
    let filename = format!(
        "versozap_{}_{}.csv",
        prefix,
        Utc::now().format("%Y%m%d_%H%M%S")
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        Body::from(csv),
    )
        .into_response()
}
