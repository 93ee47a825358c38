//! Output formatting module
//!
//! Renders the report as plain text lines on any writer.

mod report;

pub use report::{
    write_header, write_members, write_team, write_teams_rejected, NO_MEMBERS, NO_TEAMS,
};
