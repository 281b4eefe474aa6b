// ⚙️ Session Configuration
// Loaded from a JSON file, or defaults when none is given

use crate::auth::Credentials;
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Admin allowed to open the catalog
    #[serde(flatten)]
    pub credentials: Credentials,

    /// Catalog capacity; prompted for at startup when absent
    #[serde(default)]
    pub capacity: Option<usize>,

    /// Login attempts before access is denied
    #[serde(default = "default_login_attempts")]
    pub login_attempts: u32,

    /// Re-prompts allowed for an unparseable or out-of-range answer
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_login_attempts() -> u32 {
    1
}

fn default_max_retries() -> u32 {
    3
}

impl SessionConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: SessionConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.credentials.username.is_empty(), "username must not be empty");
        ensure!(
            self.credentials.password_sha256.len() == 64
                && self.credentials.password_sha256.chars().all(|c| c.is_ascii_hexdigit()),
            "password_sha256 must be a 64-character hex SHA-256 digest"
        );
        ensure!(self.capacity != Some(0), "capacity must be greater than zero");
        ensure!(self.login_attempts > 0, "login_attempts must be at least 1");
        Ok(())
    }

    /// Builder pattern: fix the capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            credentials: Credentials::default(),
            capacity: None,
            login_attempts: default_login_attempts(),
            max_retries: default_max_retries(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hash_password;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let json = format!(
            r#"{{"username": "librarian", "password_sha256": "{}", "capacity": 10, "login_attempts": 3, "max_retries": 5}}"#,
            hash_password("books")
        );
        let file = write_config(&json);

        let config = SessionConfig::from_file(file.path()).unwrap();

        assert!(config.credentials.verify("librarian", "books"));
        assert_eq!(config.capacity, Some(10));
        assert_eq!(config.login_attempts, 3);
        assert_eq!(config.max_retries, 5);
    }

    #[test]
    fn test_load_applies_defaults() {
        let json = format!(
            r#"{{"username": "librarian", "password_sha256": "{}"}}"#,
            hash_password("books")
        );
        let file = write_config(&json);

        let config = SessionConfig::from_file(file.path()).unwrap();

        assert_eq!(config.capacity, None);
        assert_eq!(config.login_attempts, 1);
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_rejects_bad_digest() {
        let file = write_config(r#"{"username": "librarian", "password_sha256": "books"}"#);

        let err = SessionConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("password_sha256"));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let json = format!(
            r#"{{"username": "librarian", "password_sha256": "{}", "capacity": 0}}"#,
            hash_password("books")
        );
        let file = write_config(&json);

        assert!(SessionConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = SessionConfig::from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::default().with_capacity(4);

        assert!(config.validate().is_ok());
        assert_eq!(config.capacity, Some(4));
    }
}
