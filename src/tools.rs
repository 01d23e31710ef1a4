//! Named search tools handed to the agent host.
//!
//! Each tool takes one free-text string and returns one formatted string.

use crate::config::{SearchConfig, SearchTypeSelector};
use crate::error::{Result, SearchError};
use crate::format::format_tickets;
use crate::query::SearchType;
use crate::search::TicketSearch;
use log::debug;

/// One invocable search tool bound to a search type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTool {
    search_type: SearchType,
}

impl SearchTool {
    pub fn new(search_type: SearchType) -> Self {
        Self { search_type }
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    pub fn name(&self) -> &'static str {
        match self.search_type {
            SearchType::Jql => "Jira_Search_JQL",
            SearchType::Text => "Jira_Search_Text",
            SearchType::Key => "Jira_Search_Key",
            SearchType::SpecificId => "Jira_Search_Specific_ID",
            SearchType::Assignee => "Jira_Search_Assignee",
            SearchType::Reporter => "Jira_Search_Reporter",
            SearchType::Status => "Jira_Search_Status",
        }
    }

    pub fn description(&self) -> &'static str {
        match self.search_type {
            SearchType::Jql => "Search Jira tickets using JQL (Jira Query Language). Input should be a valid JQL query string.",
            SearchType::Text => "Search Jira tickets containing specific text. Input should be the text to search for.",
            SearchType::Key => "Search for a specific Jira ticket by its key (e.g., PROJECT-123).",
            SearchType::SpecificId => "Search for a specific Jira ticket by its ID (e.g., OAPI-10686).",
            SearchType::Assignee => "Search Jira tickets assigned to a specific user. Input should be the username or email.",
            SearchType::Reporter => "Search Jira tickets reported by a specific user. Input should be the username or email.",
            SearchType::Status => "Search Jira tickets with a specific status. Input should be the status name (e.g., 'In Progress', 'Done').",
        }
    }

    /// Trims the input, runs the search and renders the result.
    pub async fn invoke(&self, search: &TicketSearch, input: &str) -> Result<String> {
        let input = input.trim();
        debug!("Invoking {} with input {:?}", self.name(), input);
        let tickets = search.search(self.search_type, input).await?;
        Ok(format_tickets(&tickets))
    }
}

/// Registry of the tools enabled by a search type selector.
#[derive(Clone, Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<SearchTool>,
}

impl ToolRegistry {
    pub fn for_selector(selector: SearchTypeSelector) -> Self {
        Self {
            tools: selector.enabled().into_iter().map(SearchTool::new).collect(),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::for_selector(config.search_type)
    }

    pub fn tools(&self) -> &[SearchTool] {
        &self.tools
    }

    pub fn find(&self, name: &str) -> Option<&SearchTool> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub async fn invoke(&self, search: &TicketSearch, name: &str, input: &str) -> Result<String> {
        let tool = self
            .find(name)
            .ok_or_else(|| SearchError::UnknownTool(name.to_string()))?;
        tool.invoke(search, input).await
    }
}
