//! Jira ticket search exposed as named, string-in/string-out agent tools.
//!
//! A tool call builds a JQL expression (or a direct key lookup), sends it to
//! the Jira REST API v2, flattens the issues into [`Ticket`] records and
//! renders them as plain text.

pub mod config;
pub mod error;
pub mod format;
pub mod query;
pub mod search;
pub mod ticket;
pub mod tools;

pub use config::{SearchConfig, SearchSettings, SearchTypeSelector, SettingsManager, SettingsOverrides};
pub use error::{ConfigError, Result, SearchError};
pub use format::{format_tickets, NO_TICKETS};
pub use query::{build_query, QueryPlan, SearchType};
pub use search::{SearchOptions, TicketSearch};
pub use ticket::{Attachment, Comment, Ticket};
pub use tools::{SearchTool, ToolRegistry};

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_text(value: &str, limit: usize) -> String {
    let trimmed = value.trim();
    if trimmed.chars().count() <= limit {
        return trimmed.to_string();
    }
    if limit <= 1 {
        return "…".to_string();
    }
    let mut truncated: String = trimmed.chars().take(limit - 1).collect();
    truncated.push('…');
    truncated
}

/// One-line, bounded rendering of error text for logs. Bodies mentioning
/// credentials are reduced to their leading category.
pub(crate) fn redact_log_details(value: &str) -> String {
    let collapsed = collapse_whitespace(value);
    let category = collapsed
        .split(':')
        .next()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .unwrap_or("error");
    let lowered = collapsed.to_lowercase();
    let has_sensitive_hint = [
        "token",
        "authorization",
        "basic ",
        "password",
        "api_token",
        "set-cookie",
    ]
    .iter()
    .any(|hint| lowered.contains(hint));

    if has_sensitive_hint {
        return format!(
            "{}: <redacted-sensitive-details>",
            truncate_text(category, 64)
        );
    }

    truncate_text(&collapsed, 180)
}
