//! Error model used by Jira API client operations.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JiraError>;

/// Represents the failures a Jira API call can end in. Any non-200 answer from the service is an `ApiRequest` carrying the status and the raw body; transport problems map onto the remaining variants.
#[derive(Debug, Error)]
pub enum JiraError {
    #[error("Jira API request failed: {status} - {body}")]
    ApiRequest { status: StatusCode, body: String },
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl JiraError {
    /// Constructs the non-success response variant.
    pub fn api_request(status: StatusCode, body: impl Into<String>) -> Self {
        JiraError::ApiRequest {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status when the service answered with a failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            JiraError::ApiRequest { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for JiraError {
    /// Converts reqwest errors into semantic JiraError variants.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            JiraError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            JiraError::ApiRequest {
                status,
                body: err.to_string(),
            }
        } else if err.is_connect() {
            JiraError::Network(err.to_string())
        } else if err.is_decode() {
            JiraError::Serialization(err.to_string())
        } else {
            JiraError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for JiraError {
    /// Converts serde_json decode/encode failures into serialization errors.
    fn from(err: serde_json::Error) -> Self {
        JiraError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::JiraError;
    use reqwest::StatusCode;

    #[test]
    fn api_request_display_carries_status_and_body() {
        let err = JiraError::api_request(StatusCode::NOT_FOUND, "{\"errorMessages\":[\"gone\"]}");
        assert_eq!(
            err.to_string(),
            "Jira API request failed: 404 Not Found - {\"errorMessages\":[\"gone\"]}"
        );
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn serde_errors_become_serialization_errors() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = JiraError::from(parse);
        assert!(matches!(err, JiraError::Serialization(_)));
        assert_eq!(err.status(), None);
    }
}
