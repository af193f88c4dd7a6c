//! Application configuration loaded from CLI, environment, and files.
//!
//! Values merge with the following precedence (lowest to highest):
//!
//! 1. **Defaults** – built-in application defaults
//! 2. **Configuration file** – `.verity.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `VERITY_TOKEN`, `VERITY_BIND_ADDR`, or the
//!    legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--token`/`-t` and `--bind-addr`/`-b`

use std::env;
use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::VerificationError;

/// Address the server binds to when none is configured.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `VERITY_TOKEN`, `GITHUB_TOKEN`, or `--token`: GitHub access token
/// - `VERITY_BIND_ADDR` or `--bind-addr`: server listen address
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use verity::VerityConfig;
///
/// let config = VerityConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "VERITY",
    discovery(
        dotfile_name = ".verity.toml",
        config_file_name = "verity.toml",
        app_name = "verity"
    )
)]
pub struct VerityConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `VERITY_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Socket address the HTTP server listens on.
    ///
    /// Can be provided via:
    /// - CLI: `--bind-addr <ADDR>` or `-b <ADDR>`
    /// - Environment: `VERITY_BIND_ADDR`
    /// - Config file: `bind_addr = "..."`
    ///
    /// Defaults to `0.0.0.0:8000`.
    #[ortho_config(cli_short = 'b')]
    pub bind_addr: Option<String>,
}

impl VerityConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// For backward compatibility, if no token is provided via `VERITY_TOKEN`,
    /// the CLI, or a configuration file, this method falls back to reading
    /// `GITHUB_TOKEN` from the environment. Token absence is a startup error:
    /// the binary fails fast at boot rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::MissingToken`] when no token source
    /// provides a value.
    pub fn resolve_token(&self) -> Result<String, VerificationError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(VerificationError::MissingToken)
    }

    /// Returns the configured bind address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::Configuration`] when the configured value
    /// is not a valid socket address.
    pub fn resolve_bind_addr(&self) -> Result<SocketAddr, VerificationError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|_| VerificationError::Configuration {
                message: format!("invalid bind address: {value}"),
            })
    }
}

#[cfg(test)]
mod tests;
