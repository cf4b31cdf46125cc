//! Data loading and tab tree shape for the homepage.

use contracts::github::{OrgDto, RepoDto};
use futures::future::join_all;

use crate::shared::github::{endpoints, ApiError, GithubApi};
use crate::shared::tabs::TabEntry;

pub const OWN_REPOS_TAB: &str = "My repositories";

/// One branch of the fan-out, addressable for retries
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Own,
    Org(String),
}

pub type RepoList = Result<Vec<RepoDto>, ApiError>;

#[derive(Clone, Debug, PartialEq)]
pub struct OrgRepos {
    pub org: OrgDto,
    pub repos: RepoList,
}

/// Everything the homepage shows. Each branch keeps its own result so a
/// failing organization does not hide the others.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeData {
    pub own_repos: RepoList,
    pub orgs: Vec<OrgRepos>,
}

impl HomeData {
    pub fn branch(&self, key: &SectionKey) -> Option<&RepoList> {
        match key {
            SectionKey::Own => Some(&self.own_repos),
            SectionKey::Org(login) => self
                .orgs
                .iter()
                .find(|o| &o.org.login == login)
                .map(|o| &o.repos),
        }
    }

    pub fn set_branch(&mut self, key: &SectionKey, repos: RepoList) {
        match key {
            SectionKey::Own => self.own_repos = repos,
            SectionKey::Org(login) => {
                if let Some(entry) = self.orgs.iter_mut().find(|o| &o.org.login == login) {
                    entry.repos = repos;
                }
            }
        }
    }
}

/// Top-level tab of the homepage
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub name: String,
    pub key: SectionKey,
    pub default: bool,
}

impl TabEntry for Section {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_default(&self) -> bool {
        self.default
    }
}

/// Own repositories first (selected by default), then one tab per org in
/// the order the API listed them.
pub fn sections(data: &HomeData) -> Vec<Section> {
    let own = Section {
        name: OWN_REPOS_TAB.to_string(),
        key: SectionKey::Own,
        default: true,
    };
    std::iter::once(own)
        .chain(data.orgs.iter().map(|o| Section {
            name: o.org.login.clone(),
            key: SectionKey::Org(o.org.login.clone()),
            default: false,
        }))
        .collect()
}

/// Tab labels for a repo list: the short name, or `owner/name` where the
/// short name is shared by several entries.
pub fn repo_labels(repos: &[RepoDto]) -> Vec<String> {
    repos
        .iter()
        .map(|r| {
            let clashes = repos.iter().filter(|o| o.name == r.name).count() > 1;
            if clashes {
                r.full_name.clone()
            } else {
                r.name.clone()
            }
        })
        .collect()
}

/// Fetch the org list, then own repos and every org's repos concurrently.
/// Returns once all branches have resolved.
pub async fn load_home(api: &impl GithubApi) -> Result<HomeData, ApiError> {
    let orgs = endpoints::user_orgs(api).await?;
    log::debug!("Loading repositories for {} organizations", orgs.len());

    let (own_repos, orgs) =
        futures::join!(endpoints::user_repos(api), load_org_repos(api, orgs));

    Ok(HomeData { own_repos, orgs })
}

pub async fn load_org_repos(api: &impl GithubApi, orgs: Vec<OrgDto>) -> Vec<OrgRepos> {
    join_all(orgs.into_iter().map(move |org| async move {
        let repos = endpoints::org_repos(api, &org.login).await;
        if let Err(e) = &repos {
            log::warn!("Repositories of {} failed to load: {}", org.login, e);
        }
        OrgRepos { org, repos }
    }))
    .await
}

pub async fn load_branch(api: &impl GithubApi, key: &SectionKey) -> RepoList {
    match key {
        SectionKey::Own => endpoints::user_repos(api).await,
        SectionKey::Org(login) => endpoints::org_repos(api, login).await,
    }
}
