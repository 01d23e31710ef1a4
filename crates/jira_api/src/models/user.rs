use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub display_name: Option<String>,
    pub name: Option<String>,
    pub account_id: Option<String>,
    pub email_address: Option<String>,
}

impl UserRef {
    /// Display name with empty strings treated as absent.
    pub fn display(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}
