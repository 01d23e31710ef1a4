//! Search operations: query dispatch, key lookup fallback and ticket enrichment.
//!
//! Every call is a sequential chain of requests. A search that returns N
//! tickets with both comments and attachments enabled costs up to `1 + 2N`
//! round trips; N is bounded by `max_results`.

use crate::config::SearchConfig;
use crate::error::Result;
use crate::query::{build_query, QueryPlan, SearchType};
use crate::redact_log_details;
use crate::ticket::{Attachment, Comment, Ticket};
use jira_api::{IssueRaw, JiraClient};
use log::{debug, warn};

/// Enrichment and paging options copied out of the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub max_results: u32,
    pub include_comments: bool,
    pub include_attachments: bool,
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            max_results: config.max_results,
            include_comments: config.include_comments,
            include_attachments: config.include_attachments,
        }
    }
}

/// Runs searches against one Jira instance with fixed options.
#[derive(Clone)]
pub struct TicketSearch {
    client: JiraClient,
    options: SearchOptions,
}

impl TicketSearch {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        config.validate()?;
        let client = config.jira_client()?;
        Ok(Self::with_client(client, SearchOptions::from(config)))
    }

    pub fn with_client(client: JiraClient, options: SearchOptions) -> Self {
        Self { client, options }
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Runs the search a given type stands for.
    pub async fn search(&self, search_type: SearchType, input: &str) -> Result<Vec<Ticket>> {
        match build_query(search_type, input) {
            QueryPlan::Jql(jql) => self.search_by_jql(&jql).await,
            QueryPlan::KeyLookup { key, fallback_jql } => {
                self.lookup_key(&key, &fallback_jql).await
            }
        }
    }

    pub async fn search_by_jql(&self, jql: &str) -> Result<Vec<Ticket>> {
        debug!("Searching tickets with JQL: {}", jql);
        let page = self.client.search(jql, self.options.max_results).await?;
        self.normalize_many(page.issues).await
    }

    pub async fn search_by_text(&self, text: &str) -> Result<Vec<Ticket>> {
        self.search(SearchType::Text, text).await
    }

    pub async fn search_by_assignee(&self, assignee: &str) -> Result<Vec<Ticket>> {
        self.search(SearchType::Assignee, assignee).await
    }

    pub async fn search_by_reporter(&self, reporter: &str) -> Result<Vec<Ticket>> {
        self.search(SearchType::Reporter, reporter).await
    }

    pub async fn search_by_status(&self, status: &str) -> Result<Vec<Ticket>> {
        self.search(SearchType::Status, status).await
    }

    /// Fetches one issue by key. If the direct fetch fails for any reason the
    /// key is searched with JQL instead, which may return zero or more tickets.
    pub async fn search_by_key(&self, key: &str) -> Result<Vec<Ticket>> {
        self.search(SearchType::Key, key).await
    }

    /// Same lookup as [`TicketSearch::search_by_key`], exposed under its own tool name.
    pub async fn search_by_specific_id(&self, ticket_id: &str) -> Result<Vec<Ticket>> {
        self.search(SearchType::SpecificId, ticket_id).await
    }

    async fn lookup_key(&self, key: &str, fallback_jql: &str) -> Result<Vec<Ticket>> {
        match self.client.get_issue(key).await {
            Ok(issue) => Ok(vec![self.normalize(issue).await?]),
            Err(err) => {
                warn!(
                    "Direct ticket lookup failed for {}, falling back to JQL search: {}",
                    key,
                    redact_log_details(&err.to_string())
                );
                self.search_by_jql(fallback_jql).await
            }
        }
    }

    /// Flattens one issue and fetches the enrichment the options ask for.
    pub async fn normalize(&self, issue: IssueRaw) -> Result<Ticket> {
        let mut ticket = Ticket::from_raw(issue, self.client.config());

        if self.options.include_comments {
            ticket.comments = Some(self.fetch_comments(&ticket.key).await?);
        }

        if self.options.include_attachments {
            ticket.attachments = Some(self.fetch_attachments(&ticket.key).await?);
        }

        Ok(ticket)
    }

    pub async fn normalize_many(&self, issues: Vec<IssueRaw>) -> Result<Vec<Ticket>> {
        let mut tickets = Vec::with_capacity(issues.len());
        for issue in issues {
            tickets.push(self.normalize(issue).await?);
        }
        Ok(tickets)
    }

    async fn fetch_comments(&self, issue_key: &str) -> Result<Vec<Comment>> {
        let page = self.client.get_issue_comments(issue_key).await?;
        Ok(page.comments.into_iter().map(Comment::from).collect())
    }

    // The attachment list only lives on the issue resource, so this is a full re-fetch.
    async fn fetch_attachments(&self, issue_key: &str) -> Result<Vec<Attachment>> {
        let issue = self.client.get_issue(issue_key).await?;
        Ok(issue
            .fields
            .attachment
            .unwrap_or_default()
            .into_iter()
            .map(Attachment::from)
            .collect())
    }
}
