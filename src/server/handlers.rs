//! Request handlers for the verification endpoints.

use axum::extract::State;
use axum::{Form, Json};
use serde::Deserialize;
use tracing::info;

use super::AppState;
use super::error::ApiError;
use crate::github::{
    OctocrabGateway, RepositoryLocator, RepositoryVerification, ScriptLanguagesReport,
    VerificationReport,
};

/// Form payload accepted by the verification endpoints.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// GitHub repository URL to inspect.
    pub github_url: String,
}

/// Static welcome message served at the root route.
pub async fn welcome() -> &'static str {
    "GitHub repository language verification service"
}

/// Verifies whether a repository is predominantly TypeScript/JavaScript.
///
/// Parses the submitted URL, fetches the language breakdown from GitHub, and
/// returns the full [`VerificationReport`]. Failures map onto the status
/// table in [`super::error`]; a malformed URL never reaches the network.
///
/// # Errors
///
/// Returns an [`ApiError`] for invalid URLs (400), unknown repositories
/// (404), rejected credentials (401), and upstream faults (502).
pub async fn verify_repository(
    State(state): State<AppState>,
    Form(request): Form<VerifyRequest>,
) -> Result<Json<VerificationReport>, ApiError> {
    let locator = RepositoryLocator::parse(&request.github_url)?;
    let gateway = OctocrabGateway::for_token(state.token(), &locator)?;
    let verification = RepositoryVerification::new(&gateway);
    let report = verification.verify(&locator).await?;

    info!(
        repository = %report.repository,
        is_javascript_typescript = report.is_javascript_typescript,
        "verified repository"
    );
    Ok(Json(report))
}

/// Processes a repository that must be TypeScript/JavaScript based.
///
/// Runs the same verification as [`verify_repository`] and then narrows the
/// breakdown to the TypeScript and JavaScript entries. Repositories that do
/// not pass the verdict are rejected with a 400.
///
/// # Errors
///
/// Returns an [`ApiError`] for the same failure kinds as
/// [`verify_repository`], plus a 400 when the repository is not
/// predominantly TypeScript/JavaScript.
pub async fn process_script_repository(
    State(state): State<AppState>,
    Form(request): Form<VerifyRequest>,
) -> Result<Json<ScriptLanguagesReport>, ApiError> {
    let locator = RepositoryLocator::parse(&request.github_url)?;
    let gateway = OctocrabGateway::for_token(state.token(), &locator)?;
    let verification = RepositoryVerification::new(&gateway);
    let report = verification.script_languages(&locator).await?;

    info!(repository = %report.repository, "processed script repository");
    Ok(Json(report))
}
