//! High-level verification facade used by the HTTP handlers.

use super::error::VerificationError;
use super::gateway::LanguageGateway;
use super::locator::RepositoryLocator;
use super::models::{LanguageBreakdown, ScriptLanguagesReport, VerificationReport};

/// Classifies a repository's language makeup using a gateway.
pub struct RepositoryVerification<'client, Gateway>
where
    Gateway: LanguageGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> RepositoryVerification<'client, Gateway>
where
    Gateway: LanguageGateway,
{
    /// Create a new verification facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Load the language breakdown and classify the repository.
    ///
    /// The report's `repository` field is always reconstructed from the
    /// parsed locator so the response is normalised regardless of how the
    /// input URL was written.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway, including GitHub
    /// authentication errors or network problems.
    pub async fn verify(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<VerificationReport, VerificationError> {
        let languages: LanguageBreakdown = self.client.repository_languages(locator).await?;
        Ok(VerificationReport {
            repository: locator.full_name(),
            is_javascript_typescript: languages.has_script_majority(),
            languages,
        })
    }

    /// Verify the repository and return only its TypeScript/JavaScript
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::NotScriptBased`] when the repository is
    /// not predominantly TypeScript/JavaScript, and propagates any gateway
    /// failure.
    pub async fn script_languages(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<ScriptLanguagesReport, VerificationError> {
        let report = self.verify(locator).await?;
        if !report.is_javascript_typescript {
            return Err(VerificationError::NotScriptBased);
        }
        Ok(ScriptLanguagesReport {
            repository: report.repository,
            languages: report.languages.script_languages(),
        })
    }
}
