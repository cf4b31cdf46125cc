use serde::{Deserialize, Serialize};

/// Organization the authenticated user belongs to (`user/orgs`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgDto {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub description: Option<String>,
}
