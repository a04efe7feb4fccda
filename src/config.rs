//! # Configuration
//!
//! Reads the storage account and container from the process environment.
//! Values are not validated here: an empty account produces an unusable
//! endpoint and the failure surfaces on the first request.

use tracing::warn;

/// Environment variable holding the storage account name.
pub const ACCOUNT_VAR: &str = "STORAGE_ACCOUNT_NAME";

/// Environment variable holding the target container name.
pub const CONTAINER_VAR: &str = "STORAGE_BLOB_CONTAINER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub account: String,
    pub container: String,
}

impl Config {
    /// Loads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through the given lookup function.
    ///
    /// # Examples
    ///
    /// ```
    /// use sp_blob_upload::config::Config;
    ///
    /// let config = Config::from_lookup(|key| match key {
    ///     "STORAGE_ACCOUNT_NAME" => Some("myaccount".to_string()),
    ///     "STORAGE_BLOB_CONTAINER" => Some("uploads".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.account_url(), "https://myaccount.blob.core.windows.net");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            account: read_var(&lookup, ACCOUNT_VAR),
            container: read_var(&lookup, CONTAINER_VAR),
        }
    }

    /// The blob service endpoint of the configured account.
    #[must_use]
    pub fn account_url(&self) -> String {
        account_url(&self.account)
    }
}

/// Builds the public blob service endpoint for `account`.
#[must_use]
pub fn account_url(account: &str) -> String {
    format!("https://{account}.blob.core.windows.net")
}

fn read_var<F>(lookup: &F, key: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => value,
        _ => {
            warn!(var = key, "environment variable is not set");
            String::new()
        }
    }
}
