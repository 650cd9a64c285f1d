//! Directory service collaborators.
//!
//! The picker core never talks to a network itself; it consumes an ordered
//! list of teams with their channels from a [`DirectoryProvider`]. Transport
//! and auth failures surface as [`PickerError::DirectoryUnavailable`] and
//! become a terminal error render state, never a panic inside the state
//! machine.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PickerError, Result};
use crate::model::Team;

/// Source of the team/channel tree.
///
/// Loading is a one-shot operation per picker instance, re-triggered
/// wholesale when the provider/auth context changes.
pub trait DirectoryProvider {
    /// Fetch all teams with their channels, in display order.
    fn load_teams_with_channels(&self) -> Result<Vec<Team>>;
}

/// Provider backed by a JSON file of teams.
///
/// The file holds an array of team objects in Graph-style camelCase:
/// `[{"id": "...", "displayName": "...", "channels": [...]}, ...]`.
#[derive(Debug, Clone)]
pub struct JsonFileDirectory {
    path: PathBuf,
}

impl JsonFileDirectory {
    /// Create a provider reading from the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this provider reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DirectoryProvider for JsonFileDirectory {
    fn load_teams_with_channels(&self) -> Result<Vec<Team>> {
        if !self.path.exists() {
            return Err(PickerError::TeamsFileNotFound {
                path: self.path.clone(),
            });
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| PickerError::io(format!("Failed to read {}", self.path.display()), e))?;

        let teams: Vec<Team> =
            serde_json::from_str(&content).map_err(|e| PickerError::InvalidTeamsFile {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        debug!(count = teams.len(), path = %self.path.display(), "loaded teams");
        Ok(teams)
    }
}

/// Provider serving a fixed in-memory tree. Useful for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    teams: Vec<Team>,
}

impl StaticDirectory {
    /// Create a provider serving these teams.
    #[must_use]
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }
}

impl DirectoryProvider for StaticDirectory {
    fn load_teams_with_channels(&self) -> Result<Vec<Team>> {
        Ok(self.teams.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Channel;
    use std::io::Write;

    #[test]
    fn test_json_provider_loads_teams() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"t1","displayName":"Contoso","channels":[{{"id":"c1","displayName":"General"}}]}}]"#
        )
        .unwrap();

        let provider = JsonFileDirectory::new(file.path());
        let teams = provider.load_teams_with_channels().unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].display_name, "Contoso");
        assert_eq!(teams[0].channels[0].display_name, "General");
    }

    #[test]
    fn test_json_provider_missing_file() {
        let provider = JsonFileDirectory::new("/definitely/not/here.json");
        let err = provider.load_teams_with_channels().unwrap_err();
        assert!(matches!(err, PickerError::TeamsFileNotFound { .. }));
    }

    #[test]
    fn test_json_provider_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let provider = JsonFileDirectory::new(file.path());
        let err = provider.load_teams_with_channels().unwrap_err();
        assert!(matches!(err, PickerError::InvalidTeamsFile { .. }));
    }

    #[test]
    fn test_static_provider_round_trips() {
        let provider = StaticDirectory::new(vec![
            Team::new("a", "Team A").with_channel(Channel::new("a1", "General")),
        ]);
        let teams = provider.load_teams_with_channels().unwrap();
        assert_eq!(teams[0].id, "a");
    }
}
