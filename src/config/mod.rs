mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        tokio::fs::write(
            &path,
            "server:\n  port: 9090\nmodels:\n  checkpoint_dir: /tmp/ckpt\n",
        )
        .await
        .unwrap();

        let config = load_from(&path.to_string_lossy()).await.unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.models.checkpoint_dir, "/tmp/ckpt");
    }

    #[tokio::test]
    async fn test_load_from_missing_file() {
        let result = load_from("/nonexistent/config.yaml").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_from_malformed_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        tokio::fs::write(&path, "server: [not, a, mapping]\n")
            .await
            .unwrap();

        let result = load_from(&path.to_string_lossy()).await;
        assert!(result.is_err());
    }
}
