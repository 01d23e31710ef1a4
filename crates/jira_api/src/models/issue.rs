use crate::models::{AttachmentRaw, UserRef};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IssueRaw {
    pub id: Option<String>,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct IssueFields {
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<NamedField>,
    #[serde(default)]
    pub priority: Option<NamedField>,
    #[serde(default)]
    pub assignee: Option<UserRef>,
    #[serde(default)]
    pub reporter: Option<UserRef>,
    pub created: Option<String>,
    pub updated: Option<String>,
    #[serde(default)]
    pub attachment: Option<Vec<AttachmentRaw>>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NamedField {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl IssueFields {
    pub fn status_name(&self) -> Option<&str> {
        self.status.as_ref().and_then(|status| status.name.as_deref())
    }

    pub fn priority_name(&self) -> Option<&str> {
        self.priority
            .as_ref()
            .and_then(|priority| priority.name.as_deref())
    }

    pub fn attachments(&self) -> &[AttachmentRaw] {
        self.attachment.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::IssueRaw;
    use serde_json::json;

    #[test]
    fn null_assignee_deserializes_as_absent() {
        let issue: IssueRaw = serde_json::from_value(json!({
            "key": "PROJ-1",
            "fields": {
                "summary": "Broken build",
                "assignee": null,
                "status": { "name": "Open" }
            }
        }))
        .expect("issue payload");

        assert_eq!(issue.key, "PROJ-1");
        assert!(issue.fields.assignee.is_none());
        assert!(issue.fields.reporter.is_none());
        assert_eq!(issue.fields.status_name(), Some("Open"));
        assert_eq!(issue.fields.priority_name(), None);
        assert!(issue.fields.attachments().is_empty());
    }

    #[test]
    fn missing_fields_object_defaults_to_empty() {
        let issue: IssueRaw = serde_json::from_value(json!({ "key": "PROJ-2" })).expect("issue");
        assert!(issue.fields.summary.is_none());
        assert!(issue.fields.attachments().is_empty());
    }

    #[test]
    fn attachment_list_is_kept_in_service_order() {
        let issue: IssueRaw = serde_json::from_value(json!({
            "key": "PROJ-3",
            "fields": {
                "attachment": [
                    { "filename": "b.log", "size": 20, "created": "2024-01-02", "content": "https://x/b" },
                    { "filename": "a.png", "size": 10, "created": "2024-01-01", "content": "https://x/a" }
                ]
            }
        }))
        .expect("issue");

        let names: Vec<_> = issue
            .fields
            .attachments()
            .iter()
            .filter_map(|attachment| attachment.filename.as_deref())
            .collect();
        assert_eq!(names, vec!["b.log", "a.png"]);
    }
}
