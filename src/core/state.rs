//! # Navigation State
//!
//! The state owned by the `NavigationController`:
//!
//! ```text
//! NavigationState
//! ├── current_section: Section   // always valid, defaults to Items
//! └── drawer_open: bool          // navigation drawer visibility
//! ```
//!
//! Only the current section survives a restart. It is written to
//! `~/.waresys/state.json` on exit and handed back to `initialize` as the
//! restored state on the next start.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::session::atomic_write_json;

/// One of the in-place content views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Items,
    Tags,
    Devices,
    Users,
}

impl Section {
    /// Selected on a fresh start and returned to by back navigation.
    pub const DEFAULT: Section = Section::Items;

    pub const ALL: [Section; 4] = [
        Section::Items,
        Section::Tags,
        Section::Devices,
        Section::Users,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Items => "Items",
            Section::Tags => "Tags",
            Section::Devices => "Devices",
            Section::Users => "Users",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub current_section: Section,
    #[serde(skip)]
    pub drawer_open: bool,
}

impl NavigationState {
    pub fn on(section: Section) -> Self {
        Self {
            current_section: section,
            drawer_open: false,
        }
    }
}

// ============================================================================
// Saved state
// ============================================================================

#[derive(Debug)]
pub enum StateError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::Io(e) => write!(f, "saved state I/O error: {e}"),
            StateError::Parse(e) => write!(f, "saved state parse error: {e}"),
        }
    }
}

impl std::error::Error for StateError {}

/// Load the state saved by a previous run, if there is one.
pub fn load_saved_state(path: &Path) -> Result<Option<NavigationState>, StateError> {
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path).map_err(StateError::Io)?;
    let state: NavigationState = serde_json::from_str(&json).map_err(StateError::Parse)?;
    debug!("Loaded saved state from {}: {:?}", path.display(), state);
    Ok(Some(state))
}

pub fn save_state(path: &Path, state: &NavigationState) -> Result<(), StateError> {
    atomic_write_json(path, state).map_err(StateError::Io)?;
    debug!("Saved state to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_path;

    #[test]
    fn test_default_state_is_items_with_drawer_closed() {
        let state = NavigationState::default();
        assert_eq!(state.current_section, Section::DEFAULT);
        assert_eq!(state.current_section, Section::Items);
        assert!(!state.drawer_open);
    }

    #[test]
    fn test_saved_state_drops_drawer_flag() {
        let path = scratch_path("state.json");
        let state = NavigationState {
            current_section: Section::Devices,
            drawer_open: true,
        };
        save_state(&path, &state).unwrap();

        let loaded = load_saved_state(&path).unwrap().unwrap();
        assert_eq!(loaded, NavigationState::on(Section::Devices));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_saved_state() {
        assert!(load_saved_state(&scratch_path("no-state.json")).unwrap().is_none());
    }

    #[test]
    fn test_unknown_section_fails_to_parse() {
        let path = scratch_path("bad-state.json");
        fs::write(&path, r#"{"current_section":"reports"}"#).unwrap();
        assert!(matches!(load_saved_state(&path), Err(StateError::Parse(_))));
        let _ = fs::remove_file(path);
    }
}
