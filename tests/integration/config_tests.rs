//! Configuration loading tests

#[cfg(test)]
mod tests {
    use orcid_registry::config::{Config, LogFormat};
    use orcid_registry::server::builder::load_config;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_example_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/registry.yaml.example");
        let config = Config::from_file(&path).await.unwrap();

        assert_eq!(config.server().port, 8080);
        assert_eq!(config.bulk().max_batch_size, 1000);
        assert!(config.storage().database.is_sqlite());
        assert_eq!(config.logging().format, LogFormat::Pretty);
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "bulk:\n  max_batch_size: 250\nlogging:\n  format: json").unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.bulk().max_batch_size, 250);
        assert_eq!(config.logging().format, LogFormat::Json);
        assert_eq!(config.server().host, "0.0.0.0");
    }

    #[tokio::test]
    async fn test_batch_size_above_limit_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "bulk:\n  max_batch_size: 5000").unwrap();

        let error = Config::from_file(file.path()).await.unwrap_err();
        assert!(error.to_string().contains("Bulk config error"));
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_environment() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("registry.yaml");

        assert!(load_config(&missing).await.is_ok());
    }
}
