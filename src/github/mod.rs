//! GitHub API client module
//!
//! This module talks to the GitHub REST API: organization teams and team
//! members, plus the report that ties them together.

mod client;
mod credentials;
pub mod members;
pub mod report;
pub mod teams;

pub use client::{Fetched, GithubClient};
pub use credentials::{TokenResolver, TOKEN_MISSING_MESSAGE};
pub use members::Member;
pub use report::{resolve_org, run, run_report_command, ReportSummary};
pub use teams::Team;
