use anyhow::{Context, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_stream::{Stream, StreamExt};

pub async fn forward_body<S, B, E, W>(chunks: S, out: &mut W) -> Result<usize>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::error::Error + Send + Sync + 'static,
    W: AsyncWrite + Unpin,
{
    tokio::pin!(chunks);
    let mut forwarded = 0;

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk.context("Failed to read response body")?;
        let bytes = chunk.as_ref();

        out.write_all(bytes)
            .await
            .context("Failed to write response body")?;
        out.flush().await.context("Failed to write response body")?;

        forwarded += bytes.len();
    }

    Ok(forwarded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[tokio::test]
    async fn should_forward_chunks_in_order() -> Result<()> {
        let chunks = tokio_stream::iter(vec![
            Ok::<_, io::Error>(b"hel".to_vec()),
            Ok(Vec::new()),
            Ok(b"lo".to_vec()),
        ]);
        let mut out = Vec::new();

        let forwarded = forward_body(chunks, &mut out).await?;

        assert_eq!(out, b"hello");
        assert_eq!(forwarded, 5);

        Ok(())
    }

    #[tokio::test]
    async fn should_keep_partial_body_on_read_error() {
        let chunks = tokio_stream::iter(vec![
            Ok(b"par".to_vec()),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")),
            Ok(b"never".to_vec()),
        ]);
        let mut out = Vec::new();

        let result = forward_body(chunks, &mut out).await;

        assert!(result.is_err());
        assert_eq!(out, b"par");
    }
}
