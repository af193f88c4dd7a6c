//! Gateway for loading repository language statistics through Octocrab.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests. Each failure is mapped into a
//! [`VerificationError`] variant at the point of detection and propagated
//! unmodified to the HTTP layer.

use async_trait::async_trait;
use http::{StatusCode, Uri};
use octocrab::Octocrab;

use super::error::VerificationError;
use super::locator::{PersonalAccessToken, RepositoryLocator};
use super::models::LanguageBreakdown;

/// Builds an Octocrab client for the given token and API base URL.
///
/// # Errors
///
/// Returns `VerificationError::InvalidUrl` when the base URI cannot be parsed
/// or `VerificationError::Api` when Octocrab fails to construct a client.
fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, VerificationError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| VerificationError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| VerificationError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}

/// Gateway that can load repository language statistics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageGateway: Send + Sync {
    /// Fetch the byte-count-per-language breakdown for the repository.
    async fn repository_languages(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<LanguageBreakdown, VerificationError>;
}

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and repository locator.
    ///
    /// # Errors
    ///
    /// Returns `VerificationError::InvalidUrl` when the base URI cannot be
    /// parsed or `VerificationError::Api` when Octocrab fails to construct a
    /// client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, VerificationError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl LanguageGateway for OctocrabGateway {
    async fn repository_languages(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<LanguageBreakdown, VerificationError> {
        self.client
            .get::<LanguageBreakdown, _, _>(locator.languages_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("repository languages", &error))
    }
}

// --- Error mapping helpers ---

/// Checks if a GitHub error status indicates an authentication failure.
const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> VerificationError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return if source.status_code == StatusCode::NOT_FOUND {
            VerificationError::RepositoryNotFound {
                message: format!("{operation} failed: {message}", message = source.message),
            }
        } else if is_auth_failure(source.status_code) {
            VerificationError::Authentication {
                message: format!(
                    "{operation} failed: GitHub returned {status} {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        } else {
            VerificationError::Api {
                message: format!(
                    "{operation} failed with status {status}: {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        };
    }

    if is_network_error(error) {
        return VerificationError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    VerificationError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{LanguageGateway, OctocrabGateway, VerificationError};
    use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
    use crate::github::models::LanguageBreakdown;

    const LANGUAGES_PATH: &str = "/api/v3/repos/owner/repo/languages";

    fn gateway_against(server: &MockServer) -> (OctocrabGateway, RepositoryLocator) {
        let locator = RepositoryLocator::parse(&format!("{}/owner/repo", server.uri()))
            .expect("should create repository locator");
        let token = PersonalAccessToken::new("valid-token").expect("token should be valid");
        let gateway =
            OctocrabGateway::for_token(&token, &locator).expect("should create gateway");
        (gateway, locator)
    }

    #[tokio::test]
    async fn repository_languages_returns_breakdown_verbatim() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_against(&server);

        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "TypeScript": 54321,
            "JavaScript": 12345,
            "HTML": 3456
        }));

        Mock::given(method("GET"))
            .and(path(LANGUAGES_PATH))
            .respond_with(response)
            .mount(&server)
            .await;

        let breakdown = gateway
            .repository_languages(&locator)
            .await
            .expect("request should succeed");

        let expected: LanguageBreakdown =
            [("TypeScript", 54321), ("JavaScript", 12345), ("HTML", 3456)]
                .into_iter()
                .collect();
        assert_eq!(breakdown, expected, "breakdown mismatch");
    }

    #[tokio::test]
    async fn repository_languages_maps_missing_repository() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_against(&server);

        let response = ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        }));

        Mock::given(method("GET"))
            .and(path(LANGUAGES_PATH))
            .respond_with(response)
            .mount(&server)
            .await;

        let error = gateway
            .repository_languages(&locator)
            .await
            .expect_err("request should fail");

        assert!(
            matches!(error, VerificationError::RepositoryNotFound { .. }),
            "expected RepositoryNotFound, got {error:?}"
        );
    }

    #[tokio::test]
    async fn repository_languages_maps_rejected_token() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_against(&server);

        let response = ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        }));

        Mock::given(method("GET"))
            .and(path(LANGUAGES_PATH))
            .respond_with(response)
            .mount(&server)
            .await;

        let error = gateway
            .repository_languages(&locator)
            .await
            .expect_err("request should fail");

        match error {
            VerificationError::Authentication { message } => {
                assert!(
                    message.contains("Bad credentials"),
                    "unexpected message: {message}"
                );
            }
            other => panic!("expected Authentication, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn repository_languages_maps_server_fault_to_api_error() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_against(&server);

        let response = ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "Server Error"
        }));

        Mock::given(method("GET"))
            .and(path(LANGUAGES_PATH))
            .respond_with(response)
            .mount(&server)
            .await;

        let error = gateway
            .repository_languages(&locator)
            .await
            .expect_err("request should fail");

        assert!(
            matches!(error, VerificationError::Api { .. }),
            "expected Api, got {error:?}"
        );
    }
}
