pub const DEFAULT_USER_AGENT: &str = "jira-ticket-search";
pub const API_PATH: &str = "rest/api/2";

#[derive(Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub username: String,
    pub api_token: String,
    pub user_agent: String,
}

impl JiraConfig {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            api_token: api_token.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn api_root(&self) -> String {
        format!("{}/{}/", self.base_url.trim_end_matches('/'), API_PATH)
    }

    /// Human-facing page for an issue; this is the link shown next to each ticket.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url.trim_end_matches('/'), key)
    }
}

// Hand-written so the token never ends up in logs.
impl std::fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("api_token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::JiraConfig;

    #[test]
    fn api_root_ignores_trailing_slash() {
        let config = JiraConfig::new("https://example.atlassian.net/", "me", "secret");
        assert_eq!(config.api_root(), "https://example.atlassian.net/rest/api/2/");
    }

    #[test]
    fn browse_url_is_base_plus_key() {
        let config = JiraConfig::new("https://example.atlassian.net", "me", "secret");
        assert_eq!(
            config.browse_url("PROJ-123"),
            "https://example.atlassian.net/browse/PROJ-123"
        );
    }

    #[test]
    fn debug_output_hides_token() {
        let config = JiraConfig::new("https://example.atlassian.net", "me", "secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
