use crate::{config::Environment, dispatch::SetupError};

const REPOSITORY_VARIABLE: &str = "GITHUB_REPOSITORY";

/// Identity of the repository the workflow runs for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    pub owner: String,
    pub name: String,
}

impl RepoContext {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepoContext {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn from_env(env: &impl Environment) -> Result<RepoContext, SetupError> {
        let repository = env
            .var(REPOSITORY_VARIABLE)
            .ok_or(SetupError::MissingRepository)?;

        match repository.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => {
                Ok(RepoContext::new(*owner, *name))
            }
            _ => Err(SetupError::MissingRepository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapEnvironment;

    #[test]
    fn should_read_owner_and_name() {
        let env = MapEnvironment::from([("GITHUB_REPOSITORY", "octo-org/octo-repo")]);

        let context = RepoContext::from_env(&env).unwrap();

        assert_eq!(context, RepoContext::new("octo-org", "octo-repo"));
    }

    #[test]
    fn should_fail_without_repository() {
        let err = RepoContext::from_env(&MapEnvironment::default()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "context.repo requires a GITHUB_REPOSITORY environment variable like 'owner/repo'"
        );
    }

    #[test]
    fn should_reject_malformed_repository() {
        for value in ["octo-repo", "/octo-repo", "octo-org/", "a/b/c", ""] {
            let env = MapEnvironment::from([("GITHUB_REPOSITORY", value)]);

            assert!(RepoContext::from_env(&env).is_err(), "accepted {:?}", value);
        }
    }
}
