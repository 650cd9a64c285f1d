//! The config command: view and initialize configuration.

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{default_config_path, Config};
use crate::error::{PickerError, Result};

/// Run the config command.
pub fn run(_cli: &Cli, args: &ConfigArgs, config: &Config) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let toml = toml::to_string_pretty(config).map_err(|e| PickerError::InvalidConfig {
                message: format!("Failed to serialize config: {e}"),
            })?;
            print!("{toml}");
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", default_config_path()?.display());
            Ok(())
        }
        ConfigAction::Init => {
            let path = default_config_path()?;
            if path.exists() {
                return Err(PickerError::InvalidConfig {
                    message: format!("config file already exists: {}", path.display()),
                });
            }
            Config::default().save_to(&path)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}
