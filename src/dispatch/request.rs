use crate::{config::Inputs, context::RepoContext};
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
pub struct DispatchRequest<'a> {
    owner: &'a str,
    name: &'a str,
    github_token: &'a str,
    api_token: &'a str,
}

impl<'a> DispatchRequest<'a> {
    pub fn new(repo: &'a RepoContext, inputs: &'a Inputs) -> Self {
        DispatchRequest {
            owner: &repo.owner,
            name: &repo.name,
            github_token: &inputs.github_token,
            api_token: &inputs.fork_sentry_token,
        }
    }

    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl fmt::Debug for DispatchRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchRequest")
            .field("owner", &self.owner)
            .field("name", &self.name)
            .field("github_token", &"***")
            .field("api_token", &"***")
            .finish()
    }
}
