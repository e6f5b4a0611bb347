use super::Error;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};

const DISPATCH_PATH: &str = "/dispatch";
const HTTPS_PORT: u16 = 443;
const USER_AGENT_VALUE: &str = "fork-sentry-runner";

#[derive(Clone, Debug)]
pub struct Client {
    inner: reqwest::Client,
    origin: Option<String>,
}

impl Client {
    pub fn new() -> Client {
        Client {
            inner: reqwest::Client::new(),
            origin: None,
        }
    }

    #[cfg(test)]
    pub fn with_origin(origin: impl Into<String>) -> Client {
        Client {
            inner: reqwest::Client::new(),
            origin: Some(origin.into()),
        }
    }

    pub fn dispatch_url(&self, host: &str) -> String {
        match &self.origin {
            Some(origin) => format!("{}{}", origin.trim_end_matches('/'), DISPATCH_PATH),
            None => format!("https://{}:{}{}", host, HTTPS_PORT, DISPATCH_PATH),
        }
    }

    pub async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<reqwest::Response, Error> {
        let length = body.len();

        self.inner
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_LENGTH, length)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .body(body)
            .send()
            .await
            .map_err(|cause| Error::SendError {
                url: url.to_owned(),
                cause,
            })
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
