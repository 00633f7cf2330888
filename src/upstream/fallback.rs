//! Static sample data
//!
//! Served whenever the backend roster cannot be fetched, and as the log
//! feed until log shipping from the sender is wired up. Mirrors what the
//! product returns in development.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{LogCategory, LogEntry, LogLevel, ReadingPlan, User};

/// Sample user roster
pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: Some("João Silva".to_string()),
            email: Some("joao@email.com".to_string()),
            phone: Some("11999999999".to_string()),
            bible_version: Some("ARC".to_string()),
            reading_plan: ReadingPlan::Chronological,
            send_time: Some("08:00".to_string()),
        },
        User {
            id: 2,
            name: Some("Maria Santos".to_string()),
            email: Some("maria@email.com".to_string()),
            phone: Some("11888888888".to_string()),
            bible_version: Some("NVI".to_string()),
            reading_plan: ReadingPlan::ByBook,
            send_time: Some("19:00".to_string()),
        },
        User {
            id: 3,
            name: Some("Pedro Costa".to_string()),
            email: Some("pedro@email.com".to_string()),
            phone: Some("11777777777".to_string()),
            bible_version: Some("ACF".to_string()),
            reading_plan: ReadingPlan::Chronological,
            send_time: Some("07:00".to_string()),
        },
    ]
}

/// Sample log feed, newest first
pub fn sample_logs() -> Vec<LogEntry> {
    vec![
        LogEntry::new(
            1,
            at(2025, 8, 28, 9, 30, 15),
            LogLevel::Info,
            LogCategory::Auth,
            "Usuário joao@email.com fez login via Google",
        )
        .detail("userId", 123)
        .detail("provider", "google")
        .detail("ip", "192.168.1.1"),
        LogEntry::new(
            2,
            at(2025, 8, 28, 9, 25, 42),
            LogLevel::Success,
            LogCategory::Message,
            "Mensagem enviada com sucesso para +5511999999999",
        )
        .detail("userId", 123)
        .detail("telefone", "+5511999999999")
        .detail("trecho", "João 3:16"),
        LogEntry::new(
            3,
            at(2025, 8, 28, 9, 20, 11),
            LogLevel::Error,
            LogCategory::Whatsapp,
            "Falha ao conectar com WhatsApp API",
        )
        .detail("error", "Connection timeout")
        .detail("retryAttempt", 3),
        LogEntry::new(
            4,
            at(2025, 8, 28, 9, 15, 33),
            LogLevel::Info,
            LogCategory::Bible,
            "Leitura do dia carregada: Gênesis 1:1-31",
        )
        .detail("dia", 240)
        .detail("plano", "cronologico")
        .detail("versao", "ARC"),
        LogEntry::new(
            5,
            at(2025, 8, 28, 9, 10, 55),
            LogLevel::Warning,
            LogCategory::System,
            "Alto uso de CPU detectado (85%)",
        )
        .detail("cpuUsage", 85)
        .detail("memoryUsage", 67)
        .detail("diskUsage", 45),
        LogEntry::new(
            6,
            at(2025, 8, 28, 9, 5, 20),
            LogLevel::Info,
            LogCategory::User,
            "Novo usuário cadastrado: maria@email.com",
        )
        .detail("userId", 124)
        .detail("provider", "facebook")
        .detail("versao", "NVI"),
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, sec))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}
