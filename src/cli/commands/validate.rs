//! The validate command: check a teams file without launching the TUI.

use std::collections::HashSet;

use serde_json::json;

use crate::cli::{Cli, OutputFormat, ValidateArgs};
use crate::directory::{DirectoryProvider, JsonFileDirectory};
use crate::error::{PickerError, Result};
use crate::model::TeamTree;

/// Run the validate command.
pub fn run(cli: &Cli, args: &ValidateArgs) -> Result<()> {
    let Some(teams_file) = &cli.teams_file else {
        return Err(PickerError::InvalidConfig {
            message: "no teams file given (use --teams-file or CHANPICK_TEAMS_FILE)".to_string(),
        });
    };

    let provider = JsonFileDirectory::new(teams_file);
    let teams = provider.load_teams_with_channels()?;

    let raw_count = teams.len();
    let mut duplicate_channels = Vec::new();
    for team in &teams {
        let mut seen = HashSet::new();
        for channel in &team.channels {
            if !seen.insert(channel.id.as_str()) {
                duplicate_channels.push(format!("{}/{}", team.id, channel.id));
            }
        }
    }

    let tree = TeamTree::from_teams(teams);
    let duplicate_teams = raw_count - tree.len();
    let channel_count: usize = tree.teams().map(|t| t.channels.len()).sum();
    let empty_teams: Vec<&str> = tree
        .teams()
        .filter(|t| t.channels.is_empty())
        .map(|t| t.id.as_str())
        .collect();

    match cli.output {
        OutputFormat::Text => {
            println!("Teams:    {}", tree.len());
            println!("Channels: {channel_count}");
            if duplicate_teams > 0 {
                println!("Warning: {duplicate_teams} duplicate team id(s) dropped");
            }
            for dup in &duplicate_channels {
                println!("Warning: duplicate channel id {dup}");
            }
            for id in &empty_teams {
                println!("Warning: team {id} has no channels");
            }
            if args.list {
                for team in tree.teams() {
                    println!("{} ({})", team.display_name, team.id);
                    for channel in &team.channels {
                        println!("  {} ({})", channel.display_name, channel.id);
                    }
                }
            }
        }
        OutputFormat::Json => {
            let report = json!({
                "teams": tree.len(),
                "channels": channel_count,
                "duplicateTeams": duplicate_teams,
                "duplicateChannels": duplicate_channels,
                "emptyTeams": empty_teams,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
