//! Read-only credential sources for the feed.

use std::path::PathBuf;

/// Environment variable the feed key is read from by default.
pub const CREDENTIAL_ENV_VAR: &str = "FOOD_SAFETY_API_KEY";

/// Read-only source of the feed access credential.
///
/// Absence is reported as `None`; the feed client turns that into
/// [`crate::FeedError::MissingCredential`]. Stores are never written
/// through this seam.
pub trait CredentialStore: Send + Sync {
    /// The configured credential, trimmed; `None` when unset or empty.
    fn credential(&self) -> Option<String>;
}

/// Reads the credential from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentialStore {
    var_name: String,
}

impl EnvCredentialStore {
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }
}

impl Default for EnvCredentialStore {
    fn default() -> Self {
        Self::new(CREDENTIAL_ENV_VAR)
    }
}

impl CredentialStore for EnvCredentialStore {
    fn credential(&self) -> Option<String> {
        let value = std::env::var(&self.var_name).ok()?;
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Reads the credential from the first line of a key file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialStore for FileCredentialStore {
    fn credential(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let value = content.lines().next().unwrap_or("").trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Display form of a credential for logs: first 8 and last 4 characters
/// with the middle elided. Keys too short to elide are fully masked.
pub fn mask_credential(credential: &str) -> String {
    let chars: Vec<char> = credential.chars().collect();
    if chars.len() <= 12 {
        return "***".to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}
