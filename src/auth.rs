// 🔐 Admin Credentials
// Passed into the session at startup; the password is only kept as a SHA-256 digest

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of a password
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,

    /// Lowercase hex digest, see `hash_password`
    pub password_sha256: String,
}

impl Credentials {
    /// Build credentials from a plaintext password
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        Credentials {
            username: username.into(),
            password_sha256: hash_password(password),
        }
    }

    /// Exact, case-sensitive username plus password digest match
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username
            && self.password_sha256.eq_ignore_ascii_case(&hash_password(password))
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials::new("Krrish", "12345")
    }
}
