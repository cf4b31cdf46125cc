use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository as listed by `user/repos` and `orgs/{org}/repos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoDto {
    pub id: u64,
    pub name: String,
    /// `owner/name`, used to address the repository's events
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub owner: Option<OwnerDto>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerDto {
    pub login: String,
}
