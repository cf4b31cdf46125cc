//! Typed wrappers over the endpoints the pages read.

use contracts::github::{EventDto, OrgDto, RepoDto};

use super::client::GithubApi;
use super::error::ApiError;
use crate::shared::api_utils::path_segment;

pub async fn user_orgs(api: &impl GithubApi) -> Result<Vec<OrgDto>, ApiError> {
    api.get_json("user/orgs").await
}

pub async fn user_repos(api: &impl GithubApi) -> Result<Vec<RepoDto>, ApiError> {
    api.get_json("user/repos").await
}

pub async fn org_repos(api: &impl GithubApi, org: &str) -> Result<Vec<RepoDto>, ApiError> {
    api.get_json(&org_repos_path(org)).await
}

pub async fn repo_events(
    api: &impl GithubApi,
    full_name: &str,
) -> Result<Vec<EventDto>, ApiError> {
    api.get_json(&repo_events_path(full_name)).await
}

pub fn org_repos_path(org: &str) -> String {
    format!("orgs/{}/repos", path_segment(org))
}

/// `full_name` is `owner/repo`; each half is encoded on its own
pub fn repo_events_path(full_name: &str) -> String {
    let encoded = full_name
        .split('/')
        .map(path_segment)
        .collect::<Vec<_>>()
        .join("/");
    format!("repos/{}/events", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(org_repos_path("rust-lang"), "orgs/rust-lang/repos");
        assert_eq!(
            repo_events_path("octocat/hello world"),
            "repos/octocat/hello%20world/events"
        );
    }
}
