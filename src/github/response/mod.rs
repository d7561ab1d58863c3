mod repo_response;

pub use repo_response::Repo;
pub use repo_response::RepoOwner;
