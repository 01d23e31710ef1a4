use crate::config::JiraConfig;
use crate::error::{JiraError, Result};
use crate::models::{CommentPage, IssueRaw, SearchPage};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

#[derive(Clone)]
pub struct JiraClient {
    http: HttpClient,
    config: JiraConfig,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    /// Issues one authenticated GET and returns the decoded JSON document.
    pub async fn request(&self, path: &str, query: Option<&[(&str, &str)]>) -> Result<Value> {
        self.get_with_query(path, query).await
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.get_with_query(path, None).await
    }

    pub async fn get_with_query<T>(
        &self,
        path: &str,
        query: Option<&[(&str, &str)]>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut request = self.http.get(self.url_for(path));
        if let Some(params) = query {
            request = request.query(params);
        }
        let response = request.send().await?;
        debug!(method = "GET", path, status = %response.status(), "jira request completed");
        Self::parse_json(response).await
    }

    fn url_for(&self, path: &str) -> String {
        let mut base = self.config.api_root();
        base.push_str(path.trim_start_matches('/'));
        base
    }

    async fn parse_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status == StatusCode::OK {
            response.json::<T>().await.map_err(JiraError::from)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(JiraError::api_request(status, body))
        }
    }

    /// Runs a JQL search and returns the first page, capped at `max_results` issues.
    pub async fn search(&self, jql: &str, max_results: u32) -> Result<SearchPage> {
        let max_results = max_results.to_string();
        let params = [("jql", jql), ("maxResults", max_results.as_str())];
        self.get_with_query("search", Some(&params[..])).await
    }

    pub async fn get_issue(&self, issue_key: &str) -> Result<IssueRaw> {
        let path = format!("issue/{}", issue_key);
        self.get(&path).await
    }

    pub async fn get_issue_comments(&self, issue_key: &str) -> Result<CommentPage> {
        let path = format!("issue/{}/comment", issue_key);
        self.get(&path).await
    }
}

fn build_http_client(config: &JiraConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    let credentials = BASE64_STANDARD.encode(format!("{}:{}", config.username, config.api_token));
    let mut auth_value = header_value(format!("Basic {}", credentials))?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);

    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    HttpClient::builder()
        .default_headers(headers)
        .build()
        .map_err(|err| JiraError::Other(err.to_string()))
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| JiraError::Other(err.to_string()))
}
