mod create_repo_request;
mod update_repo_request;

pub use create_repo_request::CreateRepoRequest;
pub use update_repo_request::UpdateRepoRequest;

use crate::error::Error;
use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(self) -> Result<String, Error>
    where
        Self: Serialize + Sized,
    {
        serde_json::to_string(&self).map_err(|cause| Error::EncodeRequest { cause })
    }
}

impl SerializeRequest for CreateRepoRequest {}
impl SerializeRequest for UpdateRepoRequest {}
