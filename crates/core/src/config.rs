//! Client configuration
//!
//! A client is described by a [`ClientConfig`]: the management endpoint,
//! request options and, optionally, the credentials used to obtain a token.
//! [`ConfigManager`] reads and writes it as TOML under the user's config
//! directory (`~/.config/osc/config.toml` on Linux).

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::retry::{AUTH_RETRIES_MAX, RetryConfig};

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "OSC_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

fn default_auth_retries_max() -> u32 {
    AUTH_RETRIES_MAX
}

fn default_timeout_secs() -> u64 {
    30
}

/// Connection settings for one management endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the management API
    pub endpoint: String,

    /// Send `X-EMC-Override: true` with every request
    #[serde(default)]
    pub override_header: bool,

    /// Request attempts per call when the server answers 401
    #[serde(default = "default_auth_retries_max")]
    pub auth_retries_max: u32,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Accept any TLS certificate (self-signed lab clusters)
    #[serde(default)]
    pub insecure_skip_verify: bool,

    /// Credentials; requests are sent without a token when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            override_header: false,
            auth_retries_max: AUTH_RETRIES_MAX,
            timeout_secs: default_timeout_secs(),
            insecure_skip_verify: false,
            auth: None,
        }
    }

    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_override_header(mut self, enabled: bool) -> Self {
        self.override_header = enabled;
        self
    }

    pub fn retry(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.auth_retries_max,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject settings no client could work with
    ///
    /// URL syntax is not checked here; a malformed endpoint fails the first
    /// remote call with an `invalid request` error.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("endpoint must not be empty".to_string()));
        }
        if self.auth_retries_max == 0 {
            return Err(Error::Config(
                "auth_retries_max must be at least 1".to_string(),
            ));
        }
        if let Some(auth) = &self.auth
            && auth.gateway().trim().is_empty()
        {
            return Err(Error::Config("auth gateway must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Login credentials, tagged by login protocol
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AuthConfig {
    /// Operator login: JSON token login with basic-auth fallback
    User {
        gateway: String,
        username: String,
        password: String,
    },

    /// Workload login signed with a shared secret
    Service {
        gateway: String,
        shared_secret: String,
        pod_name: String,
        namespace: String,
        object_scale_id: String,
    },

    /// Basic-auth login only, for gateways without JSON token login
    Legacy {
        gateway: String,
        username: String,
        password: String,
    },
}

impl AuthConfig {
    /// URL of the login gateway
    pub fn gateway(&self) -> &str {
        match self {
            AuthConfig::User { gateway, .. }
            | AuthConfig::Service { gateway, .. }
            | AuthConfig::Legacy { gateway, .. } => gateway,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::User {
                gateway, username, ..
            } => f
                .debug_struct("User")
                .field("gateway", gateway)
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            AuthConfig::Service {
                gateway,
                pod_name,
                namespace,
                object_scale_id,
                ..
            } => f
                .debug_struct("Service")
                .field("gateway", gateway)
                .field("shared_secret", &"<redacted>")
                .field("pod_name", pod_name)
                .field("namespace", namespace)
                .field("object_scale_id", object_scale_id)
                .finish(),
            AuthConfig::Legacy {
                gateway, username, ..
            } => f
                .debug_struct("Legacy")
                .field("gateway", gateway)
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Loads and saves the client configuration file
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Use the default location, honouring `OSC_CONFIG_DIR`
    pub fn new() -> Result<Self> {
        let dir = resolve_config_dir(std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))?;
        Ok(Self {
            config_path: dir.join(CONFIG_FILE),
        })
    }

    /// Use an explicit configuration file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Read and validate the configuration file
    pub fn load(&self) -> Result<ClientConfig> {
        if !self.config_path.exists() {
            return Err(Error::Config(format!(
                "configuration file not found: {}",
                self.config_path.display()
            )));
        }

        let content = std::fs::read_to_string(&self.config_path)?;
        let config: ClientConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;

        tracing::debug!(path = %self.config_path.display(), "Loaded client configuration");
        Ok(config)
    }

    /// Write the configuration file, creating parent directories
    ///
    /// The file holds credentials and is made owner-readable only on Unix.
    pub fn save(&self, config: &ClientConfig) -> Result<()> {
        config.validate()?;

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)
            .map_err(|e| Error::Config(format!("failed to serialize config: {e}")))?;
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.config_path)?;

        // `mode` only applies on creation
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(content.as_bytes())?;

        tracing::debug!(path = %self.config_path.display(), "Saved client configuration");
        Ok(())
    }
}

fn resolve_config_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir),
        _ => dirs::config_dir()
            .map(|dir| dir.join("osc"))
            .ok_or_else(|| Error::Config("could not determine config directory".to_string())),
    }
}
