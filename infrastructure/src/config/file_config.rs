//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use contact_domain::{ContactSchema, DEFAULT_FROM_ADDRESS, is_valid_email};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("mail.timeout_seconds ({mail}) must be below server.request_timeout_seconds ({request})")]
    ProviderTimeoutTooLong { mail: u64, request: u64 },

    #[error("server.bind_address cannot be empty")]
    EmptyBindAddress,

    #[error("email provider API key is not set (mail.api_key or ${0})")]
    MissingApiKey(String),

    #[error("destination mailbox is not set (mail.to or ${0})")]
    MissingDestination(String),

    #[error("destination mailbox is not a valid address: {0}")]
    InvalidDestination(String),
}

/// Raw HTTP server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to listen on
    pub bind_address: String,
    /// Upper bound for a whole request, including the provider call
    pub request_timeout_seconds: u64,
    /// Allow cross-origin posts from the website
    pub cors_enabled: bool,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            request_timeout_seconds: 30,
            cors_enabled: true,
        }
    }
}

impl FileServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

/// Raw contact endpoint configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContactConfig {
    /// Which payload shape `/api/contact` accepts
    pub schema: ContactSchema,
}

/// Raw email provider configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMailConfig {
    /// Fixed sender address
    pub from: String,
    /// Destination mailbox (falls back to `to_env`)
    pub to: Option<String>,
    /// Environment variable holding the destination mailbox
    pub to_env: String,
    /// Direct API key (prefer the env var)
    pub api_key: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Base URL of the provider's REST API
    pub base_url: String,
    /// Timeout for the provider call
    pub timeout_seconds: Option<u64>,
}

impl Default for FileMailConfig {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM_ADDRESS.to_string(),
            to: None,
            to_env: "CONTACT_EMAIL".to_string(),
            api_key: None,
            api_key_env: "RESEND_API_KEY".to_string(),
            base_url: "https://api.resend.com".to_string(),
            timeout_seconds: Some(25),
        }
    }
}

impl FileMailConfig {
    /// Resolve the API key from the file or the process environment
    pub fn resolve_api_key(&self) -> Result<String, ConfigValidationError> {
        self.resolve_api_key_with(|key| std::env::var(key).ok())
    }

    pub fn resolve_api_key_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<String, ConfigValidationError> {
        self.api_key
            .clone()
            .or_else(|| lookup(&self.api_key_env))
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigValidationError::MissingApiKey(self.api_key_env.clone()))
    }

    /// Resolve the destination mailbox from the file or the process environment
    pub fn resolve_to(&self) -> Result<String, ConfigValidationError> {
        self.resolve_to_with(|key| std::env::var(key).ok())
    }

    pub fn resolve_to_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<String, ConfigValidationError> {
        let to = self
            .to
            .clone()
            .or_else(|| lookup(&self.to_env))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConfigValidationError::MissingDestination(self.to_env.clone()))?;
        if !is_valid_email(&to) {
            return Err(ConfigValidationError::InvalidDestination(to));
        }
        Ok(to)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Raw form client configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Full URL of the contact endpoint
    pub endpoint: String,
    /// Timeout for the submission request
    pub timeout_seconds: Option<u64>,
    /// Portfolio page shown after a successful submission
    /// (defaults to `/portfolio` on the endpoint's site)
    pub portfolio_url: Option<String>,
    /// Instagram profile shown after a successful submission
    pub instagram_url: String,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:3000/api/contact".to_string(),
            timeout_seconds: Some(30),
            portfolio_url: None,
            instagram_url: "https://www.instagram.com/ninninummela".to_string(),
        }
    }
}

impl FileClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// The endpoint to submit to: the command-line override, else the file's
    pub fn endpoint_or(&self, endpoint: Option<String>) -> String {
        endpoint.unwrap_or_else(|| self.endpoint.clone())
    }

    /// Portfolio link for the given endpoint
    pub fn portfolio_url_for(&self, endpoint: &str) -> String {
        if let Some(url) = &self.portfolio_url {
            return url.clone();
        }
        let path_start = endpoint
            .find("://")
            .map(|scheme| scheme + 3)
            .and_then(|host| endpoint[host..].find('/').map(|slash| host + slash))
            .unwrap_or(endpoint.len());
        format!("{}/portfolio", &endpoint[..path_start])
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Contact endpoint settings
    pub contact: FileContactConfig,
    /// Email provider settings
    pub mail: FileMailConfig,
    /// Form client settings
    pub client: FileClientConfig,
}

impl FileConfig {
    /// Validate the configuration
    ///
    /// Secrets are not checked here; see [`FileMailConfig::resolve_api_key`].
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.request_timeout_seconds == 0
            || self.mail.timeout_seconds == Some(0)
            || self.client.timeout_seconds == Some(0)
        {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if let Some(mail) = self.mail.timeout_seconds
            && mail >= self.server.request_timeout_seconds
        {
            return Err(ConfigValidationError::ProviderTimeoutTooLong {
                mail,
                request: self.server.request_timeout_seconds,
            });
        }

        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBindAddress);
        }

        Ok(())
    }
}
