use super::{
    request::{CreateRepoRequest, SerializeRequest, UpdateRepoRequest},
    response::Repo,
};
use crate::{
    config::Config,
    error::Error,
    http::{Headers, HttpClient},
};
use std::time::Duration;

/// Client for the authenticated user's repositories. Holds only static
/// configuration, so a single instance can be shared across call sites
/// without synchronization. Failed calls are reported exactly once; retry
/// policy, if any, belongs to the caller.
pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: String,
    timeout: Duration,
}

impl GithubClient {
    pub fn new(config: Config) -> Self {
        GithubClient {
            http: HttpClient::new(),
            api_url: config.api_url.trim_end_matches('/').to_owned(),
            token: config.token,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub async fn list_repos(&self) -> Result<Vec<Repo>, Error> {
        let uri = format!("{}/user/repos?sort=created&direction=desc", self.api_url);

        log::debug!("listing repositories");
        let body = self.execute(self.http.get(&uri)).await?;

        // An empty body on a 2xx means no repositories, not a failure.
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&body).map_err(|cause| Error::ParseResponse { cause })
    }

    pub async fn create_repo(&self, request: CreateRepoRequest) -> Result<Repo, Error> {
        validate_repo_name(&request.name)?;

        let uri = format!("{}/user/repos", self.api_url);

        log::debug!("creating repository {}", request.name);
        let body = request.into_request()?;
        let response = self.execute(self.http.post(&uri).body(body)).await?;

        parse_repo(&response)
    }

    pub async fn update_repo(
        &self,
        owner: &str,
        repo: &str,
        request: UpdateRepoRequest,
    ) -> Result<Repo, Error> {
        require_identity(owner, repo)?;

        let uri = format!("{}/repos/{}/{}", self.api_url, owner, repo);

        log::debug!("updating repository {}/{}", owner, repo);
        let body = request.into_request()?;
        let response = self.execute(self.http.patch(&uri).body(body)).await?;

        parse_repo(&response)
    }

    pub async fn delete_repo(&self, owner: &str, repo: &str) -> Result<(), Error> {
        require_identity(owner, repo)?;

        let uri = format!("{}/repos/{}/{}", self.api_url, owner, repo);

        log::debug!("deleting repository {}/{}", owner, repo);
        self.execute(self.http.delete(&uri)).await?;

        Ok(())
    }

    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<String, Error> {
        let response = builder
            .default_headers(&self.token)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Error::transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(Error::transport)?;

        if let Some(err) = Error::from_status(status) {
            log::debug!("request failed with status {}", status);
            return Err(err);
        }

        Ok(body)
    }
}

fn parse_repo(body: &str) -> Result<Repo, Error> {
    serde_json::from_str(body).map_err(|cause| Error::ParseResponse { cause })
}

fn validate_repo_name(name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::validation("the repository name is required"));
    }

    if name.chars().any(char::is_whitespace) {
        return Err(Error::validation(
            "the repository name must not contain whitespace",
        ));
    }

    Ok(())
}

fn require_identity(owner: &str, repo: &str) -> Result<(), Error> {
    if owner.trim().is_empty() || repo.trim().is_empty() {
        return Err(Error::precondition(
            "both the repository owner and name are required",
        ));
    }

    Ok(())
}
