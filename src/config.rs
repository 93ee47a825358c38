/// Configuration constants for the GitHub REST API
pub mod api {
    /// Default REST base URL (github.com)
    pub const BASE_URL: &str = "https://api.github.com";

    /// Organizations endpoint
    pub const ORGS: &str = "orgs";

    /// Teams endpoint
    pub const TEAMS: &str = "teams";

    /// Team members endpoint (relative to a team)
    pub const MEMBERS: &str = "members";

    /// Media type requested from the API
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// REST API version header value
    pub const API_VERSION: &str = "2022-11-28";

    /// GitHub rejects requests without a User-Agent
    pub const USER_AGENT: &str = concat!("ghteams/", env!("CARGO_PKG_VERSION"));
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the bearer token
    pub const TOKEN_ENV_VAR: &str = "GITHUB_ACCESS_TOKEN";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV_VAR: &str = "GITHUB_API_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
