use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entry of `repos/{owner}/{repo}/events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDto {
    pub id: String,
    /// Event type, e.g. `PushEvent`
    #[serde(rename = "type")]
    pub kind: String,
    pub actor: ActorDto,
    #[serde(default)]
    pub payload: EventPayload,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorDto {
    pub login: String,
}

/// The payload shape depends on the event type; only the commonly shared
/// fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Head commit sha for push events
    #[serde(default)]
    pub head: Option<String>,
    #[serde(default, rename = "ref")]
    pub git_ref: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}
