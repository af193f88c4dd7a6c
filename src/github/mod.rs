//! GitHub repository language verification.
//!
//! This module wraps Octocrab to parse repository URLs, validate personal
//! access tokens, retrieve per-repository language statistics, and classify
//! whether a repository is predominantly TypeScript/JavaScript. Errors are
//! mapped into user-friendly variants so the HTTP layer can surface precise
//! failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod verification;

pub use error::VerificationError;
pub use gateway::{LanguageGateway, OctocrabGateway};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{LanguageBreakdown, ScriptLanguagesReport, VerificationReport};
pub use verification::RepositoryVerification;

#[cfg(test)]
pub use gateway::MockLanguageGateway;
