//! Repository identity wrappers and API base derivation.

use url::Url;

use super::error::GateError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, GateError> {
        if value.is_empty() {
            return Err(GateError::MissingPathSegments);
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
    pub(crate) fn new(value: &str) -> Result<Self, GateError> {
        if value.is_empty() {
            return Err(GateError::MissingPathSegments);
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
    /// Returns `GateError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, GateError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GateError::MissingToken);
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

/// Derives the GitHub API base URL from a host string.
fn derive_api_base_from_host(
    scheme: &str,
    host: &str,
    port: Option<u16>,
) -> Result<Url, GateError> {
    if host.eq_ignore_ascii_case("github.com") {
        Url::parse("https://api.github.com")
            .map_err(|error| GateError::InvalidUrl(error.to_string()))
    } else {
        let authority = if host.contains(':') {
            format!("[{host}]")
        } else {
            host.to_owned()
        };
        let mut api_url = Url::parse(&format!("{scheme}://{authority}"))
            .map_err(|error| GateError::InvalidUrl(error.to_string()))?;

        api_url
            .set_port(port)
            .map_err(|()| GateError::InvalidUrl("invalid port".to_owned()))?;
        api_url.set_path("api/v3");
        Ok(api_url)
    }
}

/// Derives the GitHub API base URL from a parsed URL.
fn derive_api_base(parsed: &Url) -> Result<Url, GateError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| GateError::InvalidUrl("URL must include a host".to_owned()))?;

    derive_api_base_from_host(parsed.scheme(), host, parsed.port())
}

/// Parsed repository identity with derived API base.
///
/// # Example
///
/// ```
/// use cheergate::github::locator::RepositoryLocator;
///
/// let locator = RepositoryLocator::from_slug("octo/repo")
///     .expect("should parse repository slug");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.repository().as_str(), "repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a repository locator from owner and repository name strings.
    ///
    /// Uses `github.com` as the default host.
    ///
    /// # Errors
    ///
    /// Returns `GateError::MissingPathSegments` when owner or repo is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, GateError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;
        let api_base = Url::parse("https://api.github.com")
            .map_err(|error| GateError::InvalidUrl(error.to_string()))?;

        Ok(Self {
            api_base,
            owner: validated_owner,
            repository,
        })
    }

    /// Creates a repository locator from an `owner/repo` slug, the format
    /// used by the `GITHUB_REPOSITORY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns `GateError::MissingPathSegments` when the slug does not split
    /// into a non-empty owner and repository pair.
    pub fn from_slug(slug: &str) -> Result<Self, GateError> {
        let (owner, repo) = slug.split_once('/').ok_or(GateError::MissingPathSegments)?;
        if repo.contains('/') {
            return Err(GateError::MissingPathSegments);
        }
        Self::from_owner_repo(owner, repo)
    }

    /// Parses a repository URL in the form `https://<host>/<owner>/<repo>`.
    ///
    /// Hosts other than `github.com` are treated as GitHub Enterprise and get
    /// an `api/v3` API base derived from the host.
    ///
    /// # Errors
    ///
    /// Returns `GateError::InvalidUrl` when parsing fails or
    /// `MissingPathSegments` when the URL path is not `/owner/repo`.
    pub fn parse(input: &str) -> Result<Self, GateError> {
        let parsed = Url::parse(input).map_err(|error| GateError::InvalidUrl(error.to_string()))?;

        let mut segments = parsed
            .path_segments()
            .ok_or(GateError::MissingPathSegments)?;

        let owner_segment = segments.next().ok_or(GateError::MissingPathSegments)?;
        let repository_segment = segments.next().ok_or(GateError::MissingPathSegments)?;

        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment)?;
        let api_base = derive_api_base(&parsed)?;

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

    /// Returns the API path for listing pull requests.
    pub(crate) fn pulls_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }
}
