//! Team data models

use serde::{Deserialize, Serialize};

/// Team data from the GitHub API
///
/// Only `id` and `name` are required; everything else the API sends is
/// either optional here or ignored.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub privacy: Option<String>,
}
