pub mod github_client;
pub mod request;
pub mod response;

pub use github_client::GithubClient;
pub use response::{Repo, RepoOwner};
