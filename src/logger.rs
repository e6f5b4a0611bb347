use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::config::Environment;

const DEBUG_FLAG: &str = "RUNNER_DEBUG";

pub fn init(env: &impl Environment) -> Result<()> {
    SimpleLogger::new()
        .with_level(level(env))
        .without_timestamps()
        .init()?;

    Ok(())
}

/// Actions sets `RUNNER_DEBUG=1` when a job is re-run with debug logging.
fn level(env: &impl Environment) -> LevelFilter {
    match env.var(DEBUG_FLAG).as_deref() {
        Some("1") => LevelFilter::Debug,
        _ => LevelFilter::Info,
    }
}
