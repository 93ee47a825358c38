//! Plain-text team report

use std::io::{self, Write};

use crate::github::{Fetched, Member, Team};

/// Printed when the team list could not be fetched
pub const NO_TEAMS: &str = "No Teams found.";

/// Printed for a team with no members to list
pub const NO_MEMBERS: &str = "No members found";

/// Header introducing the team blocks
pub fn write_header<W: Write>(out: &mut W, org: &str) -> io::Result<()> {
    writeln!(out, "Teams for organization '{}':", org)
}

/// Diagnostic plus closing line for a rejected team listing
pub fn write_teams_rejected<W: Write>(out: &mut W, status: u16) -> io::Result<()> {
    writeln!(
        out,
        "Failed to fetch organization teams. Status code: {}",
        status
    )?;
    writeln!(out, "{}", NO_TEAMS)
}

/// First line of a team block
pub fn write_team<W: Write>(out: &mut W, team: &Team) -> io::Result<()> {
    writeln!(out, "Team Name: {}  &  Team ID: {}", team.name, team.id)
}

/// Member section of a team block
///
/// Returns the number of logins written.
pub fn write_members<W: Write>(out: &mut W, members: &Fetched<Member>) -> io::Result<usize> {
    if let Fetched::Rejected { status } = members {
        writeln!(out, "Failed to fetch team members. Status code: {}", status)?;
    }

    writeln!(out, "Members of Team:")?;

    match members.items() {
        Some(members) if !members.is_empty() => {
            for member in members {
                writeln!(out, "{}", member.login)?;
            }
            Ok(members.len())
        }
        _ => {
            writeln!(out, "{}", NO_MEMBERS)?;
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn member(login: &str) -> Member {
        Member {
            login: login.to_string(),
            id: None,
            account_type: None,
            site_admin: None,
        }
    }

    #[test]
    fn test_team_line_format() {
        let team = Team {
            id: 1,
            name: "Core".to_string(),
            slug: None,
            description: None,
            privacy: None,
        };
        let text = render(|out| write_team(out, &team));
        assert_eq!(text, "Team Name: Core  &  Team ID: 1\n");
    }

    #[test]
    fn test_header_format() {
        let text = render(|out| write_header(out, "octo"));
        assert_eq!(text, "Teams for organization 'octo':\n");
    }

    #[test]
    fn test_teams_rejected() {
        let text = render(|out| write_teams_rejected(out, 404));
        assert_eq!(
            text,
            "Failed to fetch organization teams. Status code: 404\nNo Teams found.\n"
        );
    }

    #[test]
    fn test_members_listed_in_order() {
        let members = Fetched::Items(vec![member("alice"), member("bob")]);
        let mut buf = Vec::new();
        let count = write_members(&mut buf, &members).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Members of Team:\nalice\nbob\n"
        );
    }

    #[test]
    fn test_members_empty() {
        let members: Fetched<Member> = Fetched::Items(vec![]);
        let text = render(|out| write_members(out, &members).map(|_| ()));
        assert_eq!(text, "Members of Team:\nNo members found\n");
    }

    #[test]
    fn test_members_rejected() {
        let members: Fetched<Member> = Fetched::Rejected { status: 403 };
        let text = render(|out| write_members(out, &members).map(|_| ()));
        assert_eq!(
            text,
            "Failed to fetch team members. Status code: 403\nMembers of Team:\nNo members found\n"
        );
    }
}
