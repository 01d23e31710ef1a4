//! Error types surfaced by the search tools.

use std::io;

use jira_api::JiraError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Problems with the configuration, detected before any request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration value: {0}")]
    Missing(&'static str),
    #[error("invalid search type: {0} (expected jql, text, key, specific_id, assignee, reporter, status or all)")]
    InvalidSearchType(String),
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Api(#[from] JiraError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}
