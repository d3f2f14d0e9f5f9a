//! Server configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables prefixed `TRAIL__` (for example
//! `TRAIL__SERVER__PORT=9000` or `TRAIL__AUTH__SECRET=...`).

use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "TRAIL";

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Token signing and verification settings.
#[derive(Clone, Deserialize)]
pub struct AuthSettings {
    /// HMAC secret used to sign tokens
    pub secret: String,

    /// `iss` claim written to and required of every token
    pub issuer: String,

    /// `sub` claim written to every token
    pub subject: String,

    /// How long a minted token stays valid (seconds)
    pub token_ttl_secs: u64,
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("subject", &self.subject)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

impl AuthSettings {
    /// Returns the token lifetime as a Duration.
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }
}

/// All configuration for the trail server.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            auth: AuthSettings {
                secret: "change-me".to_string(),
                issuer: "trail-data-service".to_string(),
                subject: "user-auth".to_string(),
                token_ttl_secs: 60 * 60,
            },
        }
    }
}

impl Settings {
    /// Load settings from [`DEFAULT_CONFIG_FILE`] (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load settings from the given TOML file (if present) and the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_layered(path.as_ref(), ENV_PREFIX)
    }

    fn load_layered(path: &Path, env_prefix: &str) -> Result<Self, ConfigError> {
        let defaults = Settings::default();

        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("auth.secret", defaults.auth.secret)?
            .set_default("auth.issuer", defaults.auth.issuer)?
            .set_default("auth.subject", defaults.auth.subject)?
            .set_default("auth.token_ttl_secs", defaults.auth.token_ttl_secs as i64)?
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Socket address the server listens on.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}
