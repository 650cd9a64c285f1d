//! The pick command: launch the TUI and print the chosen channel.

use tracing::info;

use crate::cli::{Cli, OutputFormat, PickArgs};
use crate::config::Config;
use crate::directory::JsonFileDirectory;
use crate::error::{PickerError, Result};
use crate::tui;

/// Run the pick command.
pub fn run(cli: &Cli, args: &PickArgs, mut config: Config) -> Result<()> {
    let Some(teams_file) = &cli.teams_file else {
        return Err(PickerError::InvalidConfig {
            message: "no teams file given (use --teams-file or CHANPICK_TEAMS_FILE)".to_string(),
        });
    };

    if let Some(theme) = &args.theme {
        config.theme.name = theme.clone();
        config.validate()?;
    }

    let provider = JsonFileDirectory::new(teams_file);
    let chosen = tui::run(&provider, &config)?;

    match chosen {
        Some(pair) => {
            info!(team = %pair.team.id, channel = %pair.channel.id, "channel picked");
            match cli.output {
                OutputFormat::Text => {
                    println!("{} > {}", pair.team.display_name, pair.channel.display_name);
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&pair)?);
                }
            }
        }
        None => info!("picker closed without a selection"),
    }

    Ok(())
}
