//! Search-type tags and the JQL expressions they expand to.
//!
//! Inputs are interpolated as-is. Embedded double quotes are not escaped, so
//! a value such as `say "hi"` produces an expression the service will reject
//! or read differently. Callers that need exact matching must pass raw JQL.

/// One kind of search a tool can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchType {
    Jql,
    Text,
    Key,
    SpecificId,
    Assignee,
    Reporter,
    Status,
}

impl SearchType {
    /// Every search type in tool registration order.
    pub const ALL: [SearchType; 7] = [
        SearchType::Jql,
        SearchType::Text,
        SearchType::Key,
        SearchType::SpecificId,
        SearchType::Assignee,
        SearchType::Reporter,
        SearchType::Status,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            SearchType::Jql => "jql",
            SearchType::Text => "text",
            SearchType::Key => "key",
            SearchType::SpecificId => "specific_id",
            SearchType::Assignee => "assignee",
            SearchType::Reporter => "reporter",
            SearchType::Status => "status",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|search_type| search_type.tag().eq_ignore_ascii_case(tag))
    }
}

/// What a search type resolves to before any request is made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryPlan {
    /// Send the expression to the search endpoint.
    Jql(String),
    /// Fetch the issue directly, and search with `fallback_jql` if that fails.
    KeyLookup { key: String, fallback_jql: String },
}

pub fn build_query(search_type: SearchType, input: &str) -> QueryPlan {
    match search_type {
        SearchType::Jql => QueryPlan::Jql(input.trim().to_string()),
        SearchType::Text => QueryPlan::Jql(text_query(input)),
        SearchType::Key | SearchType::SpecificId => {
            let key = normalize_key(input);
            let fallback_jql = key_query(&key);
            QueryPlan::KeyLookup { key, fallback_jql }
        }
        SearchType::Assignee => QueryPlan::Jql(field_equals("assignee", input)),
        SearchType::Reporter => QueryPlan::Jql(field_equals("reporter", input)),
        SearchType::Status => QueryPlan::Jql(field_equals("status", input)),
    }
}

/// Trims and upper-cases an issue key such as ` proj-123 `.
pub fn normalize_key(input: &str) -> String {
    input.trim().to_uppercase()
}

pub fn text_query(text: &str) -> String {
    format!("text ~ \"{}\"", text)
}

pub fn key_query(key: &str) -> String {
    field_equals("key", key)
}

pub fn field_equals(field: &str, value: &str) -> String {
    format!("{} = \"{}\"", field, value)
}
