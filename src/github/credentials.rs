//! GitHub token resolution

use log::debug;

use crate::config::credentials;

/// Message printed when no token is available
pub const TOKEN_MISSING_MESSAGE: &str =
    "Error: GitHub access token not found. Please set GITHUB_ACCESS_TOKEN environmental variable.";

/// Token resolution with fallback logic
///
/// A missing token is not fatal: the caller warns and proceeds
/// unauthenticated.
#[derive(Debug, Default)]
pub struct TokenResolver;

impl TokenResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve token from, in order:
    /// 1. CLI argument (if provided)
    /// 2. `GITHUB_ACCESS_TOKEN` environment variable
    ///
    /// Empty values count as absent.
    pub fn resolve(&self, cli_token: Option<&str>) -> Option<String> {
        let env_token = std::env::var(credentials::TOKEN_ENV_VAR).ok();
        Self::pick(cli_token, env_token.as_deref())
    }

    fn pick(cli_token: Option<&str>, env_token: Option<&str>) -> Option<String> {
        if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Some(token.to_string());
        }

        if let Some(token) = env_token.filter(|t| !t.is_empty()) {
            debug!(
                "Using token from {} environment variable",
                credentials::TOKEN_ENV_VAR
            );
            return Some(token.to_string());
        }

        debug!(
            "No token in CLI argument or {}, proceeding unauthenticated",
            credentials::TOKEN_ENV_VAR
        );
        None
    }
}
