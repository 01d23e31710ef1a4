//! Typed Jira REST API v2 client crate used by the ticket search tools.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::JiraClient;
pub use config::JiraConfig;
pub use error::{JiraError, Result};
pub use models::{
    AttachmentRaw, CommentPage, CommentRaw, IssueFields, IssueRaw, NamedField, SearchPage,
    UserRef,
};
