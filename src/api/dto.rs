//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::domain::{LogEntry, LogStats, User, UserStats};

// ============================================
// USER DTOs
// ============================================

/// Query parameters for the user roster
#[derive(Debug, Default, Deserialize)]
pub struct UserListParams {
    /// Free-text search over name, email and phone
    #[serde(default)]
    pub search: Option<String>,
    /// Status selection: all, active, inactive
    #[serde(default)]
    pub status: Option<String>,
}

/// Filtered roster response
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    /// Users matching the criteria, roster order preserved
    pub users: Vec<User>,
    /// Number of matching users
    pub total: usize,
    /// Roster-wide counts (independent of the criteria)
    pub stats: UserStats,
}

/// Response for the user-delete stub
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub success: bool,
}

// ============================================
// LOG DTOs
// ============================================

/// Query parameters for the log list
#[derive(Debug, Default, Deserialize)]
pub struct LogListParams {
    /// Free-text search over message and category name
    #[serde(default)]
    pub search: Option<String>,
    /// Level selection: all or a level name
    #[serde(default)]
    pub level: Option<String>,
    /// Category selection: all or a category name
    #[serde(default)]
    pub category: Option<String>,
}

/// Filtered log list response
#[derive(Debug, Serialize)]
pub struct LogListResponse {
    /// Entries matching the criteria, feed order preserved
    pub logs: Vec<LogEntry>,
    /// Number of matching entries
    pub total: usize,
    /// Feed-wide breakdowns (independent of the criteria)
    pub stats: LogStats,
}

// ============================================
// DASHBOARD DTOs
// ============================================

/// Overview metrics for the dashboard cards
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_users: usize,
    pub active_users: usize,
    pub messages_today: usize,
    pub delivery_success_rate: f64,
}

/// Dashboard overview response
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    /// First five users of the roster
    pub recent_users: Vec<User>,
}

// ============================================
// SETTINGS DTOs
// ============================================

/// Response for the settings-save stub
#[derive(Debug, Serialize)]
pub struct SaveSettingsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Backend reachability: ok, unreachable
    pub backend: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
