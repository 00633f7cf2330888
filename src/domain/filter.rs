//! In-memory record filtering
//!
//! Pure, order-preserving filters over fetched collections. A criteria set
//! combines a free-text search with enum-valued selections; every supplied
//! criterion must match. Empty criteria leave the input untouched.

use super::types::{LogCategory, LogEntry, LogLevel, User};

/// Status criterion for the user roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// No status restriction
    All,
    /// Users with a scheduled send time
    Active,
    /// Users without a scheduled send time
    Inactive,
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

/// Criteria applied to the user roster
///
/// Search matches name, email and phone, case-insensitively. Fields absent
/// on a record never match a non-empty search term.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub search: Option<String>,
    pub status: StatusFilter,
}

impl UserQuery {
    pub fn matches(&self, user: &User) -> bool {
        let matches_search = match normalized(&self.search) {
            None => true,
            Some(term) => {
                contains_ci(user.name.as_deref(), &term)
                    || contains_ci(user.email.as_deref(), &term)
                    || contains_ci(user.phone.as_deref(), &term)
            }
        };

        let matches_status = match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => user.is_active(),
            StatusFilter::Inactive => !user.is_active(),
        };

        matches_search && matches_status
    }
}

/// Criteria applied to the log list
///
/// Level and category are exact matches; search matches the message text and
/// the category name, case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    pub search: Option<String>,
    pub level: Option<LogLevel>,
    pub category: Option<LogCategory>,
}

impl LogQuery {
    pub fn matches(&self, entry: &LogEntry) -> bool {
        let matches_level = self.level.map_or(true, |l| entry.level == l);
        let matches_category = self.category.map_or(true, |c| entry.category == c);

        let matches_search = match normalized(&self.search) {
            None => true,
            Some(term) => {
                entry.message.to_lowercase().contains(&term)
                    || entry.category.to_string().to_lowercase().contains(&term)
            }
        };

        matches_level && matches_category && matches_search
    }
}

/// Filter the roster, preserving input order
pub fn filter_users(users: Vec<User>, query: &UserQuery) -> Vec<User> {
    users.into_iter().filter(|u| query.matches(u)).collect()
}

/// Filter the log list, preserving input order
pub fn filter_logs(logs: Vec<LogEntry>, query: &LogQuery) -> Vec<LogEntry> {
    logs.into_iter().filter(|e| query.matches(e)).collect()
}

/// Lowercase a search term, treating blank input as no criterion
fn normalized(search: &Option<String>) -> Option<String> {
    search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn contains_ci(field: Option<&str>, term: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(term))
}
