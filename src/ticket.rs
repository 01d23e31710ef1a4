//! Flat ticket records produced from raw Jira issue payloads.
//!
//! These are the shapes the formatter renders. They are rebuilt on every
//! search and never stored.

use jira_api::{AttachmentRaw, CommentRaw, IssueRaw, JiraConfig};

/// Assignee shown when an issue has nobody assigned.
pub const UNASSIGNED: &str = "Unassigned";
/// Reporter or comment author shown when the service does not name one.
pub const UNKNOWN_USER: &str = "Unknown";

/// Represents one normalized ticket: key, summary, description, status, priority, people, timestamps and the browse link, plus comments and attachments when they were requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub key: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee: String,
    pub reporter: String,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub url: String,
    pub comments: Option<Vec<Comment>>,
    pub attachments: Option<Vec<Attachment>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub author: String,
    pub created: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub size: u64,
    pub created: String,
    pub url: String,
}

impl Ticket {
    /// Flattens the issue fields. Comments and attachments are left unset.
    pub fn from_raw(issue: IssueRaw, config: &JiraConfig) -> Self {
        let fields = issue.fields;
        let assignee = fields
            .assignee
            .as_ref()
            .and_then(|user| user.display())
            .unwrap_or(UNASSIGNED)
            .to_string();
        let reporter = fields
            .reporter
            .as_ref()
            .and_then(|user| user.display())
            .unwrap_or(UNKNOWN_USER)
            .to_string();
        let status = fields.status_name().map(str::to_string);
        let priority = fields.priority_name().map(str::to_string);

        Ticket {
            url: config.browse_url(&issue.key),
            key: issue.key,
            summary: fields.summary,
            description: fields.description,
            status,
            priority,
            assignee,
            reporter,
            created: fields.created,
            updated: fields.updated,
            comments: None,
            attachments: None,
        }
    }
}

impl From<CommentRaw> for Comment {
    fn from(comment: CommentRaw) -> Self {
        Comment {
            author: comment
                .author
                .as_ref()
                .and_then(|user| user.display())
                .unwrap_or(UNKNOWN_USER)
                .to_string(),
            created: comment.created.unwrap_or_default(),
            body: comment.body.unwrap_or_default(),
        }
    }
}

impl From<AttachmentRaw> for Attachment {
    fn from(attachment: AttachmentRaw) -> Self {
        Attachment {
            filename: attachment.filename.unwrap_or_default(),
            size: attachment.size.unwrap_or_default(),
            created: attachment.created.unwrap_or_default(),
            url: attachment.content.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Attachment, Comment, Ticket, UNASSIGNED, UNKNOWN_USER};
    use jira_api::{AttachmentRaw, CommentRaw, IssueRaw, JiraConfig};
    use serde_json::json;

    fn config() -> JiraConfig {
        JiraConfig::new("https://example.atlassian.net", "me", "secret")
    }

    fn issue(value: serde_json::Value) -> IssueRaw {
        serde_json::from_value(value).expect("issue payload")
    }

    #[test]
    fn full_issue_is_flattened() {
        let ticket = Ticket::from_raw(
            issue(json!({
                "key": "PROJ-7",
                "fields": {
                    "summary": "Login fails",
                    "description": "Steps to reproduce",
                    "status": { "name": "In Progress" },
                    "priority": { "name": "High" },
                    "assignee": { "displayName": "Ann Lee" },
                    "reporter": { "displayName": "Bob Roe" },
                    "created": "2024-01-01T09:00:00.000+0000",
                    "updated": "2024-01-02T09:00:00.000+0000"
                }
            })),
            &config(),
        );

        assert_eq!(ticket.key, "PROJ-7");
        assert_eq!(ticket.summary.as_deref(), Some("Login fails"));
        assert_eq!(ticket.description.as_deref(), Some("Steps to reproduce"));
        assert_eq!(ticket.status.as_deref(), Some("In Progress"));
        assert_eq!(ticket.priority.as_deref(), Some("High"));
        assert_eq!(ticket.assignee, "Ann Lee");
        assert_eq!(ticket.reporter, "Bob Roe");
        assert_eq!(ticket.created.as_deref(), Some("2024-01-01T09:00:00.000+0000"));
        assert_eq!(ticket.updated.as_deref(), Some("2024-01-02T09:00:00.000+0000"));
        assert_eq!(ticket.url, "https://example.atlassian.net/browse/PROJ-7");
        assert!(ticket.comments.is_none());
        assert!(ticket.attachments.is_none());
    }

    #[test]
    fn missing_people_resolve_to_sentinels() {
        let ticket = Ticket::from_raw(
            issue(json!({ "key": "PROJ-8", "fields": { "summary": "Orphan" } })),
            &config(),
        );
        assert_eq!(ticket.assignee, UNASSIGNED);
        assert_eq!(ticket.reporter, UNKNOWN_USER);
    }

    #[test]
    fn people_without_display_name_resolve_to_sentinels() {
        let ticket = Ticket::from_raw(
            issue(json!({
                "key": "PROJ-9",
                "fields": { "assignee": { "name": "ann" }, "reporter": { "displayName": "" } }
            })),
            &config(),
        );
        assert_eq!(ticket.assignee, UNASSIGNED);
        assert_eq!(ticket.reporter, UNKNOWN_USER);
    }

    #[test]
    fn comment_without_author_is_attributed_to_unknown() {
        let raw: CommentRaw =
            serde_json::from_value(json!({ "created": "2024-02-02", "body": "ping" }))
                .expect("comment");
        assert_eq!(
            Comment::from(raw),
            Comment {
                author: UNKNOWN_USER.to_string(),
                created: "2024-02-02".to_string(),
                body: "ping".to_string(),
            }
        );
    }

    #[test]
    fn attachment_keeps_name_size_and_content_url() {
        let raw: AttachmentRaw = serde_json::from_value(json!({
            "filename": "trace.log",
            "size": 2048,
            "created": "2024-02-03",
            "content": "https://example.atlassian.net/secure/attachment/1/trace.log"
        }))
        .expect("attachment");

        let attachment = Attachment::from(raw);
        assert_eq!(attachment.filename, "trace.log");
        assert_eq!(attachment.size, 2048);
        assert_eq!(
            attachment.url,
            "https://example.atlassian.net/secure/attachment/1/trace.log"
        );
    }
}
