//! Attachment metadata models embedded in Jira issue payloads.

use serde::Deserialize;

/// Represents attachment metadata listed under `fields.attachment` of an issue, including file name, byte size, creation timestamp and download URL.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRaw {
    pub id: Option<String>,
    pub filename: Option<String>,
    pub size: Option<u64>,
    pub created: Option<String>,
    pub content: Option<String>,
    pub mime_type: Option<String>,
}
