//! Settings Routes
//!
//! Product settings read and the save stub.
//!
//! - GET /api/v1/settings - Current settings
//! - POST /api/v1/settings - Save a section (form-encoded, logged stub)

use axum::{extract::State, Form, Json};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::dto::SaveSettingsResponse;
use crate::api::state::AppState;
use crate::settings::{Settings, SettingsSection};

/// GET /api/v1/settings
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<Settings> {
    Json(state.settings.as_ref().clone())
}

/// POST /api/v1/settings
///
/// The dashboard posts its form fields plus a `section` discriminator.
/// Persistence is not wired to the backend yet; a known section is logged
/// and acknowledged, an unknown one is rejected with `success: false`.
pub async fn save_settings(
    State(_state): State<Arc<AppState>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Json<SaveSettingsResponse> {
    let section = fields.get("section").map(String::as_str).unwrap_or("");

    match SettingsSection::parse(section) {
        Some(section) => {
            tracing::info!(
                section = %section,
                fields = ?fields,
                "Settings save requested but not implemented"
            );

            Json(SaveSettingsResponse {
                success: true,
                message: Some("Configurações salvas com sucesso!".to_string()),
            })
        }
        None => {
            tracing::warn!(section = %section, "Settings save for unknown section rejected");

            Json(SaveSettingsResponse {
                success: false,
                message: None,
            })
        }
    }
}
