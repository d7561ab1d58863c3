use serde::Deserialize;

/// Subset of the repository payload the client consumes. Addressed by
/// `owner.login` plus `name` for update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repo {
    pub name: String,
    pub description: Option<String>,
    pub owner: RepoOwner,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoOwner {
    pub id: u64,
    pub login: String,
    #[serde(rename = "avatar_url")]
    pub avatar_url: String,
}
