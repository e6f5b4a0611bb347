use crate::dispatch::SetupError;
use std::fmt;

const INPUT_PREFIX: &str = "INPUT_";

const GITHUB_TOKEN_INPUT: &str = "github_token";
const FORK_SENTRY_TOKEN_INPUT: &str = "fork_sentry_token";
const INFRA_ENDPOINT_INPUT: &str = "infra_endpoint";

pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;
}

pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

pub struct Inputs {
    pub github_token: String,
    pub fork_sentry_token: String,
    pub infra_endpoint: String,
}

impl Inputs {
    pub fn load(env: &impl Environment) -> Result<Inputs, SetupError> {
        Ok(Inputs {
            github_token: get_input(env, GITHUB_TOKEN_INPUT)?,
            fork_sentry_token: get_input(env, FORK_SENTRY_TOKEN_INPUT)?,
            infra_endpoint: get_input(env, INFRA_ENDPOINT_INPUT)?,
        })
    }

    pub fn secrets(&self) -> [&str; 2] {
        [self.github_token.as_str(), self.fork_sentry_token.as_str()]
    }
}

impl fmt::Debug for Inputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inputs")
            .field("github_token", &"***")
            .field("fork_sentry_token", &"***")
            .field("infra_endpoint", &self.infra_endpoint)
            .finish()
    }
}

fn input_variable(name: &str) -> String {
    format!("{}{}", INPUT_PREFIX, name.replace(' ', "_").to_uppercase())
}

pub fn get_input(env: &impl Environment, name: &str) -> Result<String, SetupError> {
    env.var(&input_variable(name))
        .map(|value| value.trim().to_owned())
        .ok_or_else(|| SetupError::MissingInput {
            name: name.to_owned(),
        })
}

#[cfg(test)]
#[derive(Default)]
pub struct MapEnvironment(pub std::collections::HashMap<String, String>);

#[cfg(test)]
impl<const N: usize> From<[(&str, &str); N]> for MapEnvironment {
    fn from(pairs: [(&str, &str); N]) -> Self {
        MapEnvironment(
            pairs
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .collect(),
        )
    }
}

#[cfg(test)]
impl Environment for MapEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}
