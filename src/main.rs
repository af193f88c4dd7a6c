//! Verity server entrypoint.

use std::process::ExitCode;

use ortho_config::OrthoConfig;
use tracing::error;
use verity::{AppState, PersonalAccessToken, Server, VerificationError, VerityConfig, telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            error!(%failure, "server exited with error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), VerificationError> {
    let config = load_config()?;

    // Token absence is a boot-time failure, not a first-request surprise.
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let bind_addr = config.resolve_bind_addr()?;

    let server = Server::new(bind_addr, AppState::new(token));
    server.run().await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`VerificationError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<VerityConfig, VerificationError> {
    VerityConfig::load().map_err(|error| VerificationError::Configuration {
        message: error.to_string(),
    })
}
