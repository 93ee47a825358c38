//! CLI argument parsing

use clap::Parser;

use crate::config::{api, credentials, defaults};

/// GitHub organization team lister
#[derive(Parser, Debug)]
#[command(name = "ghteams")]
#[command(version)]
#[command(
    about = "Fetch teams and its members for a GitHub organization",
    long_about = None
)]
pub struct Cli {
    /// Name of the GitHub organization
    #[arg(short, long = "org-name", alias = "org_name")]
    pub org_name: Option<String>,

    /// API token (overrides the GITHUB_ACCESS_TOKEN environment variable)
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = credentials::API_URL_ENV_VAR, default_value = api::BASE_URL)]
    pub api_url: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no progress spinner
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
