use crate::models::UserRef;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage {
    #[serde(default)]
    pub comments: Vec<CommentRaw>,
    pub start_at: Option<u64>,
    pub max_results: Option<u64>,
    pub total: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommentRaw {
    pub id: Option<String>,
    pub author: Option<UserRef>,
    pub body: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
}
