//! ghteams - list the teams of a GitHub organization and their members
//!
//! Fetches the teams of one organization, then the members of each team,
//! and prints them as plain text.
//!
//! # Example
//!
//! ```bash
//! export GITHUB_ACCESS_TOKEN=ghp_...
//! ghteams --org-name my-org
//!
//! # GitHub Enterprise Server
//! ghteams --org-name my-org --api-url https://ghe.example.com/api/v3
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod output;
pub mod ui;

pub use cli::Cli;
pub use error::{GhError, Result};
pub use github::{
    resolve_org, run, run_report_command, Fetched, GithubClient, Member, ReportSummary, Team,
    TokenResolver,
};
