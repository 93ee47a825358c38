//! Team membership API operations

use crate::config::api;
use crate::error::Result;
use crate::github::{Fetched, GithubClient};

use super::models::Member;

impl GithubClient {
    /// Get the members of a team by its numeric ID
    pub async fn fetch_team_members(&self, team_id: u64) -> Result<Fetched<Member>> {
        let path = format!("/{}/{}/{}", api::TEAMS, team_id, api::MEMBERS);
        let context = format!("members of team {}", team_id);

        self.fetch_list::<Member>(&path, &context).await
    }
}
