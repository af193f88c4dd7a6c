//! URL parsing and identity wrappers for repository verification.

use std::borrow::Cow;

use url::Url;

use super::error::VerificationError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, VerificationError> {
        if value.is_empty() {
            return Err(VerificationError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, VerificationError> {
        if value.is_empty() {
            return Err(VerificationError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `VerificationError::MissingToken` when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, VerificationError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(VerificationError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Prepends an `https` scheme when the input has none.
///
/// Accepts the scheme-less forms users paste from a browser address bar,
/// such as `github.com/owner/repo` or `www.github.com/owner/repo`.
fn normalise_input(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim();
    if trimmed.contains("://") {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("https://{trimmed}"))
    }
}

/// Returns true when the host is the public GitHub service.
fn is_public_github(host: &str) -> bool {
    host.eq_ignore_ascii_case("github.com") || host.eq_ignore_ascii_case("www.github.com")
}

/// Derives the GitHub API base URL from a host string.
fn derive_api_base_from_host(
    scheme: &str,
    host: &str,
    port: Option<u16>,
) -> Result<Url, VerificationError> {
    if is_public_github(host) {
        Url::parse("https://api.github.com")
            .map_err(|error| VerificationError::InvalidUrl(error.to_string()))
    } else {
        let authority = if host.contains(':') {
            format!("[{host}]")
        } else {
            host.to_owned()
        };
        let mut api_url = Url::parse(&format!("{scheme}://{authority}"))
            .map_err(|error| VerificationError::InvalidUrl(error.to_string()))?;

        api_url
            .set_port(port)
            .map_err(|()| VerificationError::InvalidUrl("invalid port".to_owned()))?;
        api_url.set_path("api/v3");
        Ok(api_url)
    }
}

/// Derives the GitHub API base URL from a parsed URL.
fn derive_api_base(parsed: &Url) -> Result<Url, VerificationError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| VerificationError::InvalidUrl("URL must include a host".to_owned()))?;

    derive_api_base_from_host(parsed.scheme(), host, parsed.port())
}

/// Parsed repository URL and derived API base.
///
/// # Example
///
/// ```
/// use verity::github::RepositoryLocator;
///
/// let locator = RepositoryLocator::parse("https://github.com/octo/repo")
///     .expect("should parse repository URL");
/// assert_eq!(locator.full_name(), "octo/repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Parses a GitHub repository URL in the form
    /// `https://github.com/<owner>/<repo>`.
    ///
    /// The scheme is optional and defaults to `https`, a `www.` subdomain and
    /// a trailing `.git` suffix are stripped, and path segments after the
    /// repository name (for example `/tree/main`) are ignored. Hosts other
    /// than `github.com` are treated as GitHub Enterprise installations.
    ///
    /// # Errors
    ///
    /// Returns `VerificationError::InvalidUrl` when parsing fails or
    /// `MissingPathSegments` when the URL path does not contain both an owner
    /// and a repository name.
    pub fn parse(input: &str) -> Result<Self, VerificationError> {
        let normalised = normalise_input(input);
        let parsed = Url::parse(&normalised)
            .map_err(|error| VerificationError::InvalidUrl(error.to_string()))?;

        let api_base = derive_api_base(&parsed)?;

        let mut segments = parsed
            .path_segments()
            .ok_or(VerificationError::MissingPathSegments)?
            .filter(|segment| !segment.is_empty());

        let owner_segment = segments
            .next()
            .ok_or(VerificationError::MissingPathSegments)?;
        let repository_segment = segments
            .next()
            .ok_or(VerificationError::MissingPathSegments)?;
        let repository_segment = repository_segment
            .strip_suffix(".git")
            .unwrap_or(repository_segment);

        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment)?;

        Ok(Self {
            api_base,
            owner,
            repository,
        })
    }

    /// API base URL derived from the repository host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Canonical `owner/name` form reconstructed from the parsed segments.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.repository.as_str())
    }

    /// Returns the API path for the repository language statistics.
    pub(crate) fn languages_path(&self) -> String {
        format!(
            "/repos/{}/{}/languages",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }
}
