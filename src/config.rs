//! Search configuration model and the file-backed settings manager.

use crate::error::ConfigError;
use crate::query::SearchType;
use jira_api::{JiraClient, JiraConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Default page size for every search.
fn default_max_results() -> u32 {
    10
}

/// Which search tools get registered. Stored as the bare tag, e.g. `"jql"` or `"all"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SearchTypeSelector {
    Only(SearchType),
    #[default]
    All,
}

impl SearchTypeSelector {
    pub fn includes(&self, search_type: SearchType) -> bool {
        match self {
            SearchTypeSelector::All => true,
            SearchTypeSelector::Only(selected) => *selected == search_type,
        }
    }

    /// Enabled search types in registration order.
    pub fn enabled(&self) -> Vec<SearchType> {
        SearchType::ALL
            .into_iter()
            .filter(|search_type| self.includes(*search_type))
            .collect()
    }
}

impl FromStr for SearchTypeSelector {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(SearchTypeSelector::All);
        }
        SearchType::from_tag(value)
            .map(SearchTypeSelector::Only)
            .ok_or_else(|| ConfigError::InvalidSearchType(value.to_string()))
    }
}

impl TryFrom<String> for SearchTypeSelector {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SearchTypeSelector> for String {
    fn from(selector: SearchTypeSelector) -> Self {
        selector.to_string()
    }
}

impl fmt::Display for SearchTypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchTypeSelector::All => f.write_str("all"),
            SearchTypeSelector::Only(search_type) => f.write_str(search_type.tag()),
        }
    }
}

/// Represents the non-secret search settings persisted on disk: instance URL, username, search type selector, result cap and enrichment toggles.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SearchSettings {
    pub jira_instance: String,
    pub username: String,
    pub search_type: SearchTypeSelector,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    pub include_comments: bool,
    pub include_attachments: bool,
}

impl Default for SearchSettings {
    /// Returns baseline settings when nothing is persisted.
    fn default() -> Self {
        Self {
            jira_instance: String::new(),
            username: String::new(),
            search_type: SearchTypeSelector::All,
            max_results: default_max_results(),
            include_comments: false,
            include_attachments: false,
        }
    }
}

/// Per-invocation overrides layered on top of persisted settings.
#[derive(Clone, Debug, Default)]
pub struct SettingsOverrides {
    pub jira_instance: Option<String>,
    pub username: Option<String>,
    pub search_type: Option<SearchTypeSelector>,
    pub max_results: Option<u32>,
    pub include_comments: Option<bool>,
    pub include_attachments: Option<bool>,
}

impl SearchSettings {
    pub fn merge(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(instance) = overrides.jira_instance {
            self.jira_instance = instance;
        }
        if let Some(username) = overrides.username {
            self.username = username;
        }
        if let Some(search_type) = overrides.search_type {
            self.search_type = search_type;
        }
        if let Some(max_results) = overrides.max_results {
            self.max_results = max_results;
        }
        if let Some(flag) = overrides.include_comments {
            self.include_comments = flag;
        }
        if let Some(flag) = overrides.include_attachments {
            self.include_attachments = flag;
        }
        self
    }
}

/// Full configuration for one tool instance. Built once and only read afterwards.
#[derive(Clone)]
pub struct SearchConfig {
    pub jira_instance: String,
    pub username: String,
    pub api_token: String,
    pub search_type: SearchTypeSelector,
    pub max_results: u32,
    pub include_comments: bool,
    pub include_attachments: bool,
}

impl SearchConfig {
    pub fn new(
        jira_instance: impl Into<String>,
        username: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            jira_instance: jira_instance.into(),
            username: username.into(),
            api_token: api_token.into(),
            search_type: SearchTypeSelector::All,
            max_results: default_max_results(),
            include_comments: false,
            include_attachments: false,
        }
    }

    pub fn from_settings(
        settings: SearchSettings,
        api_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            jira_instance: settings.jira_instance,
            username: settings.username,
            api_token: api_token.into(),
            search_type: settings.search_type,
            max_results: settings.max_results,
            include_comments: settings.include_comments,
            include_attachments: settings.include_attachments,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_search_type(mut self, search_type: SearchTypeSelector) -> Self {
        self.search_type = search_type;
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_comments(mut self, include: bool) -> Self {
        self.include_comments = include;
        self
    }

    pub fn with_attachments(mut self, include: bool) -> Self {
        self.include_attachments = include;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jira_instance.trim().is_empty() {
            return Err(ConfigError::Missing("jira_instance"));
        }
        if self.username.trim().is_empty() {
            return Err(ConfigError::Missing("username"));
        }
        if self.api_token.trim().is_empty() {
            return Err(ConfigError::Missing("api_token"));
        }
        Ok(())
    }

    pub fn jira_config(&self) -> JiraConfig {
        JiraConfig::new(
            self.jira_instance.trim(),
            self.username.trim(),
            self.api_token.trim(),
        )
    }

    pub fn jira_client(&self) -> Result<JiraClient, jira_api::JiraError> {
        JiraClient::new(self.jira_config())
    }

    /// Non-secret view of this configuration.
    pub fn settings(&self) -> SearchSettings {
        SearchSettings {
            jira_instance: self.jira_instance.clone(),
            username: self.username.clone(),
            search_type: self.search_type,
            max_results: self.max_results,
            include_comments: self.include_comments,
            include_attachments: self.include_attachments,
        }
    }
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("jira_instance", &self.jira_instance)
            .field("username", &self.username)
            .field("api_token", &"<redacted>")
            .field("search_type", &self.search_type)
            .field("max_results", &self.max_results)
            .field("include_comments", &self.include_comments)
            .field("include_attachments", &self.include_attachments)
            .finish()
    }
}

/// Manages loading and saving of search settings to a JSON file in the platform-specific config directory.
pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    /// Creates a manager bound to the platform-specific settings path.
    pub fn new() -> Result<Self, ConfigError> {
        let dirs = directories::ProjectDirs::from("com", "jira-ticket-search", "jira-ticket-search")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_path(dirs.config_dir().join("settings.json")))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads settings from disk, falling back to defaults on read/parse errors.
    pub fn load(&self) -> SearchSettings {
        if self.path.exists() {
            let content = fs::read_to_string(&self.path).unwrap_or_default();
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SearchSettings::default()
        }
    }

    /// Persists settings to disk, creating parent directories when needed.
    pub fn save(&self, settings: &SearchSettings) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchConfig, SearchSettings, SearchTypeSelector, SettingsManager, SettingsOverrides};
    use crate::error::ConfigError;
    use crate::query::SearchType;
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        env::temp_dir().join(format!("jira-search-tests-{name}-{nanos}/settings.json"))
    }

    #[test]
    fn default_settings_have_expected_values() {
        let settings = SearchSettings::default();
        assert_eq!(settings.search_type, SearchTypeSelector::All);
        assert_eq!(settings.max_results, 10);
        assert!(!settings.include_comments);
        assert!(!settings.include_attachments);
    }

    #[test]
    fn selector_parses_tags_and_all() {
        assert_eq!("all".parse::<SearchTypeSelector>().unwrap(), SearchTypeSelector::All);
        assert_eq!(
            "specific_id".parse::<SearchTypeSelector>().unwrap(),
            SearchTypeSelector::Only(SearchType::SpecificId)
        );
        assert!(matches!(
            "everything".parse::<SearchTypeSelector>(),
            Err(ConfigError::InvalidSearchType(_))
        ));
    }

    #[test]
    fn selector_enables_one_or_every_type() {
        assert_eq!(SearchTypeSelector::All.enabled(), SearchType::ALL.to_vec());
        assert_eq!(
            SearchTypeSelector::Only(SearchType::Status).enabled(),
            vec![SearchType::Status]
        );
        assert_eq!(SearchTypeSelector::Only(SearchType::Key).to_string(), "key");
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let settings = SearchSettings {
            jira_instance: "https://old.example".to_string(),
            username: "ann".to_string(),
            ..SearchSettings::default()
        };
        let merged = settings.merge(SettingsOverrides {
            jira_instance: Some("https://new.example".to_string()),
            max_results: Some(3),
            include_comments: Some(true),
            ..SettingsOverrides::default()
        });

        assert_eq!(merged.jira_instance, "https://new.example");
        assert_eq!(merged.username, "ann");
        assert_eq!(merged.max_results, 3);
        assert!(merged.include_comments);
        assert!(!merged.include_attachments);
    }

    #[test]
    fn config_requires_instance_username_and_token() {
        let settings = SearchSettings {
            jira_instance: "https://example.atlassian.net".to_string(),
            username: "ann".to_string(),
            ..SearchSettings::default()
        };
        assert!(matches!(
            SearchConfig::from_settings(settings.clone(), "  "),
            Err(ConfigError::Missing("api_token"))
        ));
        assert!(matches!(
            SearchConfig::from_settings(SearchSettings::default(), "token"),
            Err(ConfigError::Missing("jira_instance"))
        ));

        let config = SearchConfig::from_settings(settings, "s3cr3t").expect("valid config");
        assert_eq!(config.settings().username, "ann");
        assert!(!format!("{:?}", config).contains("s3cr3t"));
    }

    #[test]
    fn load_missing_file_returns_default() {
        let manager = SettingsManager::with_path(unique_path("missing"));
        assert_eq!(manager.load(), SearchSettings::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = unique_path("roundtrip");
        let parent = path.parent().map(ToOwned::to_owned);

        let manager = SettingsManager::with_path(path.clone());
        let settings = SearchSettings {
            jira_instance: "https://example.atlassian.net".to_string(),
            username: "ann@example.com".to_string(),
            search_type: SearchTypeSelector::Only(SearchType::Jql),
            max_results: 25,
            include_comments: true,
            include_attachments: false,
        };

        manager.save(&settings).expect("save should succeed");
        assert_eq!(manager.load(), settings);

        let raw = fs::read_to_string(&path).expect("settings file");
        assert!(raw.contains("\"search_type\": \"jql\""));
        assert!(!raw.contains("api_token"));

        if let Some(parent) = parent {
            let _ = fs::remove_dir_all(parent);
        }
    }

    #[test]
    fn load_invalid_json_falls_back_to_default() {
        let path = unique_path("invalid");
        let parent = path.parent().expect("parent must exist");
        fs::create_dir_all(parent).expect("create temp directory");
        fs::write(&path, "not-valid-json").expect("write invalid settings");

        let manager = SettingsManager::with_path(path.clone());
        assert_eq!(manager.load(), SearchSettings::default());

        let _ = fs::remove_dir_all(parent);
    }
}
