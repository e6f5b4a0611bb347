mod actions;
mod config;
mod context;
mod dispatch;
mod http;
mod logger;

use anyhow::{Context, Result};
use config::ProcessEnvironment;
use http::Client;

#[tokio::main]
async fn main() -> Result<()> {
    let env = ProcessEnvironment;
    logger::init(&env)?;

    let client = Client::new();
    let mut stdout = tokio::io::stdout();

    if let Err(err) = dispatch::run(&env, &client, &mut stdout).await {
        log::debug!("{:?}", err);
        actions::set_failed(&mut stdout, &err.to_string())
            .await
            .context("Cannot report the failure to the runner")?;
        std::process::exit(1);
    }

    Ok(())
}
