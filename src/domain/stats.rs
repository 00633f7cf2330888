//! Derived statistics
//!
//! Single-pass counts over record collections: active/inactive users and
//! per-level / per-category log breakdowns. Breakdowns over an enumerated
//! domain always carry every key, so zero counts are explicit.

use serde::Serialize;
use std::collections::HashMap;

use super::types::{LogCategory, LogEntry, LogLevel, User};

/// Roster counts shown on the users page and the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// Compute roster counts
pub fn user_stats(users: &[User]) -> UserStats {
    let active = users.iter().filter(|u| u.is_active()).count();
    UserStats {
        total: users.len(),
        active,
        inactive: users.len() - active,
    }
}

/// Log counts broken down by level and category
///
/// Both maps enumerate their full domain; keys with no occurrences are
/// present with count 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogStats {
    pub total: usize,
    pub by_level: HashMap<LogLevel, usize>,
    pub by_category: HashMap<LogCategory, usize>,
}

/// Compute log breakdowns
pub fn log_stats(logs: &[LogEntry]) -> LogStats {
    let mut by_level: HashMap<LogLevel, usize> =
        LogLevel::all().iter().map(|l| (*l, 0)).collect();
    let mut by_category: HashMap<LogCategory, usize> =
        LogCategory::all().iter().map(|c| (*c, 0)).collect();

    for entry in logs {
        *by_level.entry(entry.level).or_default() += 1;
        *by_category.entry(entry.category).or_default() += 1;
    }

    LogStats {
        total: logs.len(),
        by_level,
        by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with_send_time(id: u64, send_time: Option<&str>) -> User {
        User {
            id,
            name: None,
            email: None,
            phone: None,
            bible_version: None,
            reading_plan: Default::default(),
            send_time: send_time.map(String::from),
        }
    }

    fn log(id: u64, level: LogLevel) -> LogEntry {
        LogEntry::new(id, Utc::now(), level, LogCategory::System, "event")
    }

    #[test]
    fn test_user_stats_counts_active_by_send_time() {
        let users = vec![
            user_with_send_time(1, Some("08:00")),
            user_with_send_time(2, None),
            user_with_send_time(3, Some("19:00")),
        ];

        let stats = user_stats(&users);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.inactive, 1);
    }

    #[test]
    fn test_level_counts_match_example() {
        let levels = [
            LogLevel::Info,
            LogLevel::Success,
            LogLevel::Error,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Info,
        ];
        let logs: Vec<LogEntry> = levels
            .iter()
            .enumerate()
            .map(|(i, l)| log(i as u64, *l))
            .collect();

        let stats = log_stats(&logs);
        assert_eq!(stats.by_level[&LogLevel::Info], 3);
        assert_eq!(stats.by_level[&LogLevel::Success], 1);
        assert_eq!(stats.by_level[&LogLevel::Error], 1);
        assert_eq!(stats.by_level[&LogLevel::Warning], 1);
    }

    #[test]
    fn test_counts_partition_the_input() {
        let logs: Vec<LogEntry> = (0..17)
            .map(|i| {
                let level = LogLevel::all()[i % 3];
                log(i as u64, level)
            })
            .collect();

        let stats = log_stats(&logs);
        assert_eq!(stats.by_level.values().sum::<usize>(), logs.len());
        assert_eq!(stats.by_category.values().sum::<usize>(), logs.len());
    }

    #[test]
    fn test_zero_counts_are_present() {
        let stats = log_stats(&[log(1, LogLevel::Info)]);

        assert_eq!(stats.by_level.len(), LogLevel::all().len());
        assert_eq!(stats.by_category.len(), LogCategory::all().len());
        assert_eq!(stats.by_level[&LogLevel::Error], 0);
        assert_eq!(stats.by_category[&LogCategory::Whatsapp], 0);
    }

    #[test]
    fn test_empty_input() {
        let stats = user_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.active, 0);

        let stats = log_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.by_level.values().sum::<usize>(), 0);
    }
}
