//! Core record types for the VersoZap admin service
//!
//! This module defines the two record kinds the dashboard works with:
//! - `User`: a VersoZap subscriber as returned by the backend roster
//! - `LogEntry`: a system log event with level, category and detail payload
//!
//! Wire formats follow the VersoZap backend: user fields keep their
//! Portuguese names via serde renames, log levels and categories travel
//! uppercase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A VersoZap subscriber
///
/// Contact fields are optional because the backend roster endpoint may
/// return partially registered users. A user is considered **active** when
/// a scheduled send time is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier assigned by the backend
    pub id: u64,
    /// Display name
    #[serde(rename = "nome")]
    pub name: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// WhatsApp phone number
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    /// Preferred Bible translation code (e.g. "ARC", "NVI", "ACF")
    #[serde(rename = "versao_biblia")]
    pub bible_version: Option<String>,
    /// Reading plan the daily passages follow
    #[serde(rename = "plano_leitura", default)]
    pub reading_plan: ReadingPlan,
    /// Daily send time as "HH:MM"; absent means delivery is paused
    #[serde(rename = "horario_envio")]
    pub send_time: Option<String>,
}

impl User {
    /// A user is active when a non-empty send time is scheduled
    pub fn is_active(&self) -> bool {
        self.send_time.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Reading plan for daily passages
///
/// The backend sends "cronologico" or "livros"; any unrecognized code is
/// treated as `ByBook`, matching how the dashboard has always rendered it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String")]
pub enum ReadingPlan {
    /// Bible in historical order
    #[serde(rename = "cronologico")]
    Chronological,
    /// Book by book, front to back
    #[serde(rename = "livros")]
    ByBook,
}

impl From<String> for ReadingPlan {
    fn from(code: String) -> Self {
        match code.as_str() {
            "cronologico" => ReadingPlan::Chronological,
            _ => ReadingPlan::ByBook,
        }
    }
}

impl Default for ReadingPlan {
    fn default() -> Self {
        ReadingPlan::Chronological
    }
}

impl std::fmt::Display for ReadingPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadingPlan::Chronological => write!(f, "cronologico"),
            ReadingPlan::ByBook => write!(f, "livros"),
        }
    }
}

/// Severity of a log event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// All levels, for enumerated breakdowns
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Info,
            LogLevel::Success,
            LogLevel::Warning,
            LogLevel::Error,
        ]
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Success => write!(f, "SUCCESS"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Subsystem a log event originated from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogCategory {
    /// Login and session events
    Auth,
    /// Message composition and delivery
    Message,
    /// WhatsApp sender connectivity
    Whatsapp,
    /// Reading plan and passage loading
    Bible,
    /// Host and process health
    System,
    /// Account lifecycle events
    User,
}

impl LogCategory {
    /// All categories, for enumerated breakdowns
    pub fn all() -> &'static [LogCategory] {
        &[
            LogCategory::Auth,
            LogCategory::Message,
            LogCategory::Whatsapp,
            LogCategory::Bible,
            LogCategory::System,
            LogCategory::User,
        ]
    }
}

impl std::fmt::Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogCategory::Auth => write!(f, "AUTH"),
            LogCategory::Message => write!(f, "MESSAGE"),
            LogCategory::Whatsapp => write!(f, "WHATSAPP"),
            LogCategory::Bible => write!(f, "BIBLE"),
            LogCategory::System => write!(f, "SYSTEM"),
            LogCategory::User => write!(f, "USER"),
        }
    }
}

/// A single system log event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    /// Unique identifier
    pub id: u64,
    /// When the event happened (UTC)
    pub timestamp: DateTime<Utc>,
    /// Severity
    pub level: LogLevel,
    /// Originating subsystem
    pub category: LogCategory,
    /// Human-readable description
    pub message: String,
    /// Open-ended structured context
    #[serde(default)]
    pub details: HashMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Create a log entry with the given timestamp
    pub fn new(
        id: u64,
        timestamp: DateTime<Utc>,
        level: LogLevel,
        category: LogCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            level,
            category,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Builder method: attach a detail value
    pub fn detail(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_format() {
        let json = r#"{
            "id": 1,
            "nome": "João Silva",
            "email": "joao@email.com",
            "telefone": "11999999999",
            "versao_biblia": "ARC",
            "plano_leitura": "cronologico",
            "horario_envio": "08:00"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name.as_deref(), Some("João Silva"));
        assert_eq!(user.phone.as_deref(), Some("11999999999"));
        assert_eq!(user.reading_plan, ReadingPlan::Chronological);
        assert!(user.is_active());
    }

    #[test]
    fn test_user_missing_fields() {
        let json = r#"{"id": 7, "horario_envio": null}"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, None);
        assert_eq!(user.email, None);
        assert_eq!(user.reading_plan, ReadingPlan::Chronological);
        assert!(!user.is_active());
    }

    #[test]
    fn test_unknown_reading_plan_degrades_to_by_book() {
        let json = r#"{"id": 2, "plano_leitura": "tematico"}"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.reading_plan, ReadingPlan::ByBook);
    }

    #[test]
    fn test_empty_send_time_is_inactive() {
        let json = r#"{"id": 3, "horario_envio": ""}"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert!(!user.is_active());
    }

    #[test]
    fn test_level_and_category_serialize_uppercase() {
        assert_eq!(
            serde_json::to_string(&LogLevel::Warning).unwrap(),
            r#""WARNING""#
        );
        assert_eq!(
            serde_json::to_string(&LogCategory::Whatsapp).unwrap(),
            r#""WHATSAPP""#
        );

        let level: LogLevel = serde_json::from_str(r#""SUCCESS""#).unwrap();
        assert_eq!(level, LogLevel::Success);
    }

    #[test]
    fn test_log_entry_details_builder() {
        let entry = LogEntry::new(
            1,
            Utc::now(),
            LogLevel::Info,
            LogCategory::Auth,
            "login",
        )
        .detail("provider", "google")
        .detail("userId", 123);

        assert_eq!(entry.details.len(), 2);
        assert_eq!(entry.details["provider"], serde_json::json!("google"));
    }
}
