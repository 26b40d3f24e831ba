//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.cheergate.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `CHEERGATE_TOKEN` (or legacy
//!    `GITHUB_TOKEN`), `CHEERGATE_OWNER`, `CHEERGATE_REPO`, `CHEERGATE_DAYS`,
//!    `CHEERGATE_BYPASS_MODE`
//! 4. **Command-line arguments** – `--token`/`-t`, `--owner`/`-o`,
//!    `--repo`/`-r`, `--days`/`-d`, `--bypass-mode`
//!
//! The target repository additionally falls back to the `GITHUB_REPOSITORY`
//! environment variable (`owner/repo`), so the gate picks up the execution
//! context of a CI run without explicit flags.
//!
//! `days` and `bypass_mode` stay raw strings here; parsing with defaults
//! happens once, in [`crate::gate::GateSettings::from_config`].

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::GateError;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use cheergate::CheergateConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CheergateConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// let (owner, repo) = config.resolve_repository().expect("repository required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CHEERGATE",
    discovery(
        dotfile_name = ".cheergate.toml",
        config_file_name = "cheergate.toml",
        app_name = "cheergate"
    )
)]
pub struct CheergateConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `CHEERGATE_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Repository owner (e.g., "octocat").
    ///
    /// Can be provided via:
    /// - CLI: `--owner <OWNER>` or `-o <OWNER>`
    /// - Environment: `CHEERGATE_OWNER`
    /// - Config file: `owner = "..."`
    /// - Fallback: the owner half of `GITHUB_REPOSITORY`
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    ///
    /// Can be provided via:
    /// - CLI: `--repo <REPO>` or `-r <REPO>`
    /// - Environment: `CHEERGATE_REPO`
    /// - Config file: `repo = "..."`
    /// - Fallback: the repository half of `GITHUB_REPOSITORY`
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Lookback window in days, as a raw string.
    ///
    /// Non-numeric or non-positive values fall back to the default of 7.
    ///
    /// Can be provided via:
    /// - CLI: `--days <DAYS>` or `-d <DAYS>`
    /// - Environment: `CHEERGATE_DAYS`
    /// - Config file: `days = "..."`
    #[ortho_config(cli_short = 'd')]
    pub days: Option<String>,

    /// Bypass mode flag, as a raw string compared case-insensitively to
    /// `"true"`.
    ///
    /// When enabled, a failing gate is downgraded to a warning and the run
    /// terminates successfully.
    ///
    /// Can be provided via:
    /// - CLI: `--bypass-mode <VALUE>`
    /// - Environment: `CHEERGATE_BYPASS_MODE`
    /// - Config file: `bypass_mode = "..."`
    #[ortho_config()]
    pub bypass_mode: Option<String>,
}

impl CheergateConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, GateError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(GateError::MissingToken)
    }

    /// Resolves the target repository as an `(owner, repo)` pair.
    ///
    /// Explicit `owner`/`repo` values take precedence half-by-half; missing
    /// halves are filled from the `GITHUB_REPOSITORY` environment variable
    /// (`owner/repo`).
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Configuration`] when either half cannot be
    /// resolved or when a resolved half is empty.
    pub fn resolve_repository(&self) -> Result<(String, String), GateError> {
        let context_slug = env::var("GITHUB_REPOSITORY").ok();
        let context_pair = context_slug.as_deref().and_then(|slug| slug.split_once('/'));

        let owner = self
            .owner
            .clone()
            .or_else(|| context_pair.map(|(context_owner, _)| context_owner.to_owned()));
        let repo = self
            .repo
            .clone()
            .or_else(|| context_pair.map(|(_, context_repo)| context_repo.to_owned()));

        match (owner, repo) {
            (Some(resolved_owner), Some(resolved_repo))
                if !resolved_owner.is_empty() && !resolved_repo.is_empty() =>
            {
                Ok((resolved_owner, resolved_repo))
            }
            (None, _) => Err(GateError::Configuration {
                message: "repository owner is required (use --owner or -o, or set \
                          GITHUB_REPOSITORY)"
                    .to_owned(),
            }),
            (_, None) => Err(GateError::Configuration {
                message: "repository name is required (use --repo or -r, or set \
                          GITHUB_REPOSITORY)"
                    .to_owned(),
            }),
            _ => Err(GateError::Configuration {
                message: "GITHUB_REPOSITORY must look like <owner>/<repo>".to_owned(),
            }),
        }
    }
}
