//! Verity library crate providing GitHub repository language verification.
//!
//! The library wraps Octocrab to parse repository URLs, validate tokens,
//! retrieve per-repository language statistics, and classify whether a
//! repository is predominantly TypeScript/JavaScript. The `server` module
//! exposes the same pipeline over HTTP.

pub mod config;
pub mod github;
pub mod server;
pub mod telemetry;

pub use config::VerityConfig;
pub use github::{
    LanguageBreakdown, LanguageGateway, OctocrabGateway, PersonalAccessToken, RepositoryLocator,
    RepositoryVerification, ScriptLanguagesReport, VerificationError, VerificationReport,
};
pub use server::{AppState, Server, build_app};
