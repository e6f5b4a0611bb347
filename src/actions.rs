use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub enum Command {
    AddMask,
    Error,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::AddMask => "add-mask",
            Command::Error => "error",
        }
    }
}

fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub async fn issue<W>(out: &mut W, command: Command, data: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let line = format!("::{}::{}\n", command.name(), escape_data(data));
    out.write_all(line.as_bytes()).await?;
    out.flush().await
}

/// Registers a secret so the runner masks it in the job log.
pub async fn add_mask<W>(out: &mut W, secret: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    if secret.is_empty() {
        return Ok(());
    }

    issue(out, Command::AddMask, secret).await
}

pub async fn set_failed<W>(out: &mut W, message: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    issue(out, Command::Error, message).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_escape_command_data() {
        assert_eq!(escape_data("50%\r\ndone"), "50%25%0D%0Adone");
    }

    #[tokio::test]
    async fn should_issue_error_command() -> io::Result<()> {
        let mut out = Vec::new();

        set_failed(&mut out, "Input required and not supplied: infra_endpoint").await?;

        assert_eq!(
            String::from_utf8_lossy(&out),
            "::error::Input required and not supplied: infra_endpoint\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn should_mask_secret() -> io::Result<()> {
        let mut out = Vec::new();

        add_mask(&mut out, "s3cr3t").await?;

        assert_eq!(String::from_utf8_lossy(&out), "::add-mask::s3cr3t\n");

        Ok(())
    }

    #[tokio::test]
    async fn should_skip_empty_secret() -> io::Result<()> {
        let mut out = Vec::new();

        add_mask(&mut out, "").await?;

        assert!(out.is_empty());

        Ok(())
    }
}
