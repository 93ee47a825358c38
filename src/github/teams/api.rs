//! Team API operations

use crate::config::api;
use crate::error::Result;
use crate::github::{Fetched, GithubClient};

use super::models::Team;

impl GithubClient {
    /// Get the teams of an organization
    ///
    /// Single request, first page only.
    pub async fn fetch_organization_teams(&self, org: &str) -> Result<Fetched<Team>> {
        let path = format!(
            "/{}/{}/{}",
            api::ORGS,
            urlencoding::encode(org),
            api::TEAMS
        );
        let context = format!("teams for organization '{}'", org);

        self.fetch_list::<Team>(&path, &context).await
    }
}
