//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::info;

/// Ensure the collection data directory exists, creating it when missing.
pub async fn ensure_env(data_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(data_dir).await.is_err() {
        info!(%data_dir, "data directory not found; creating it");
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_env_creates_nested_dir() -> anyhow::Result<()> {
        let dir = std::env::temp_dir()
            .join(format!("jobboard_env_{}", uuid::Uuid::new_v4()))
            .join("data");
        let dir_str = dir.to_string_lossy().to_string();
        ensure_env(&dir_str).await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        // second call is a no-op
        ensure_env(&dir_str).await?;
        let _ = tokio::fs::remove_dir_all(dir.parent().unwrap()).await;
        Ok(())
    }
}
