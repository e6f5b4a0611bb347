mod client;

pub use client::Client;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to send request to {url}")]
    SendError {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
}
