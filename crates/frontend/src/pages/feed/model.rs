use contracts::github::EventDto;

use crate::shared::github::{endpoints, ApiError, GithubApi};

/// `"{actor} {type} {head}"`, head omitted when the event has none
pub fn event_line(event: &EventDto) -> String {
    match event.payload.head.as_deref() {
        Some(head) => format!("{} {} {}", event.actor.login, event.kind, head),
        None => format!("{} {}", event.actor.login, event.kind),
    }
}

pub async fn load_feed(api: &impl GithubApi, full_name: &str) -> Result<Vec<EventDto>, ApiError> {
    let events = endpoints::repo_events(api, full_name).await?;
    log::debug!("{}: {} events", full_name, events.len());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: serde_json::Value) -> EventDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_push_event_line() {
        let e = event(json!({
            "id": "1",
            "type": "PushEvent",
            "actor": { "login": "octocat" },
            "payload": { "head": "abc123" }
        }));
        assert_eq!(event_line(&e), "octocat PushEvent abc123");
    }

    #[test]
    fn test_event_line_without_head() {
        let e = event(json!({
            "id": "2",
            "type": "WatchEvent",
            "actor": { "login": "hubot" },
            "payload": { "action": "started" }
        }));
        assert_eq!(event_line(&e), "hubot WatchEvent");
    }
}
