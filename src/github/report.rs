//! Team report command: teams of an organization with their members

use log::{debug, info};
use std::io::Write;

use crate::cli::Cli;
use crate::error::{GhError, Result};
use crate::github::credentials::{TokenResolver, TOKEN_MISSING_MESSAGE};
use crate::github::{Fetched, GithubClient};
use crate::output::{write_header, write_members, write_team, write_teams_rejected};
use crate::ui::{create_spinner, finish_spinner};

/// Counters collected while printing a report
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Team listing came back non-200
    pub teams_rejected: bool,
    /// Team blocks printed
    pub teams: usize,
    /// Member logins printed across all teams
    pub members: usize,
    /// Member listings that came back non-200
    pub member_fetches_rejected: usize,
}

/// Validate the organization name before any request is made
pub fn resolve_org(org: Option<&str>) -> Result<String> {
    match org.map(str::trim) {
        Some(org) if !org.is_empty() => Ok(org.to_string()),
        Some(_) => Err(GhError::Config(
            "Organization name must not be empty (--org-name)".to_string(),
        )),
        None => Err(GhError::Config(
            "Organization name is required (--org-name)".to_string(),
        )),
    }
}

/// Fetch and print the teams of `org`, then the members of each team
///
/// Requests run one after another in the order the API returned the teams.
pub async fn run_report_command<W: Write>(
    client: &GithubClient,
    org: &str,
    quiet: bool,
    out: &mut W,
) -> Result<ReportSummary> {
    let mut summary = ReportSummary::default();

    debug!("Fetching teams for organization: {}", org);
    let spinner = create_spinner(&format!("Fetching teams for '{}'...", org), quiet);
    let teams = client.fetch_organization_teams(org).await;
    finish_spinner(spinner);

    let teams = match teams? {
        Fetched::Items(teams) => teams,
        Fetched::Rejected { status } => {
            write_teams_rejected(out, status)?;
            summary.teams_rejected = true;
            return Ok(summary);
        }
    };

    write_header(out, org)?;

    for team in &teams {
        write_team(out, team)?;

        let spinner = create_spinner(&format!("Fetching members of '{}'...", team.name), quiet);
        let members = client.fetch_team_members(team.id).await;
        finish_spinner(spinner);
        let members = members?;

        if let Fetched::Rejected { .. } = members {
            summary.member_fetches_rejected += 1;
        }
        summary.members += write_members(out, &members)?;
        summary.teams += 1;
    }

    Ok(summary)
}

/// Entry point for the binary: credentials, validation, then the report
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<ReportSummary> {
    let token = TokenResolver::new().resolve(cli.token.as_deref());
    if token.is_none() {
        writeln!(out, "{}", TOKEN_MISSING_MESSAGE)?;
    }

    let org = resolve_org(cli.org_name.as_deref())?;
    let client = GithubClient::new(token, &cli.api_url)?;
    debug!(
        "Using API at {} (authenticated: {})",
        cli.api_url,
        client.is_authenticated()
    );

    let summary = run_report_command(&client, &org, cli.batch, out).await?;
    out.flush()?;

    info!(
        "Report for '{}' done: {} team(s), {} member(s), {} member fetch(es) rejected",
        org, summary.teams, summary.members, summary.member_fetches_rejected
    );
    Ok(summary)
}
