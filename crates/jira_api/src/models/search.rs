//! Result page returned by the JQL search endpoint.

use crate::models::IssueRaw;
use serde::Deserialize;

/// One page of issues matching a JQL expression. Only the first page is ever requested.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub issues: Vec<IssueRaw>,
    pub start_at: Option<u64>,
    pub max_results: Option<u64>,
    pub total: Option<u64>,
}
