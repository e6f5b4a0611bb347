mod request;
mod stream;

pub use request::DispatchRequest;

use crate::{
    actions,
    config::{Environment, Inputs},
    context::RepoContext,
    http::Client,
};
use anyhow::Context;
use std::{error::Error as StdError, io};
use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub const COMPLETION_MESSAGE: &str =
    "Done! Comment alerts will be created if suspicious forks show up";

/// Failures that stop the run before anything is sent.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Input required and not supplied: {name}")]
    MissingInput { name: String },
    #[error("context.repo requires a GITHUB_REPOSITORY environment variable like 'owner/repo'")]
    MissingRepository,
    #[error("Failed to register secret with the runner")]
    MaskError {
        #[source]
        cause: io::Error,
    },
    #[error("Failed to encode dispatch request")]
    EncodeError {
        #[source]
        cause: serde_json::Error,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    Delivered { status: u16 },
    TransportFailed { reason: String },
}

fn time_of_day() -> String {
    chrono::Local::now().format("%H:%M:%S GMT%z").to_string()
}

// reqwest errors already render their own sources, so only the first cause is appended.
fn describe(err: &(dyn StdError + 'static)) -> String {
    match err.source() {
        Some(cause) => format!("{}: {}", err, cause),
        None => err.to_string(),
    }
}

async fn forward_response<W>(response: reqwest::Response, out: &mut W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let line = format!("statusCode: {}\n", response.status().as_u16());
    out.write_all(line.as_bytes())
        .await
        .context("Failed to write status code")?;
    out.flush().await.context("Failed to write status code")?;

    let forwarded = stream::forward_body(response.bytes_stream(), out).await?;
    log::debug!("forwarded {} response bytes", forwarded);

    Ok(())
}

pub async fn run<E, W>(env: &E, client: &Client, out: &mut W) -> Result<DispatchOutcome, SetupError>
where
    E: Environment,
    W: AsyncWrite + Unpin,
{
    let inputs = Inputs::load(env)?;
    let repo = RepoContext::from_env(env)?;

    for secret in inputs.secrets() {
        actions::add_mask(out, secret)
            .await
            .map_err(|cause| SetupError::MaskError { cause })?;
    }

    log::info!("Starting fork integrity analysis at {}", time_of_day());

    let request = DispatchRequest::new(&repo, &inputs);
    log::debug!("{:?}", request);
    let body = request
        .encode()
        .map_err(|cause| SetupError::EncodeError { cause })?;

    let url = client.dispatch_url(&inputs.infra_endpoint);
    let outcome = match client.post_json(&url, body).await {
        Ok(response) => {
            let status = response.status().as_u16();

            if let Err(err) = forward_response(response, out).await {
                log::error!("{}", describe(&*err));
            }

            DispatchOutcome::Delivered { status }
        }
        Err(err) => {
            let reason = describe(&err);
            log::error!("{}", reason);

            DispatchOutcome::TransportFailed { reason }
        }
    };

    log::info!("{}", COMPLETION_MESSAGE);

    Ok(outcome)
}
