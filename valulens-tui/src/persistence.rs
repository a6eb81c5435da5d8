//! UI state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::{AppState, Overlay, Panel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub last_ticker: Option<String>,
    pub active_panel: Panel,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            last_ticker: None,
            active_panel: Panel::Snapshot,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if the file is
/// missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk, creating parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        last_ticker: app.last_ticker.clone(),
        active_panel: app.active_panel,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

pub fn apply(app: &mut AppState, state: PersistedState) {
    app.last_ticker = state.last_ticker;
    app.active_panel = state.active_panel;
    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("valulens_persist_test");
        let path = dir.join("state.json");

        let state = PersistedState {
            last_ticker: Some("ACME".into()),
            active_panel: Panel::Chart,
            welcome_dismissed: true,
        };

        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.last_ticker.as_deref(), Some("ACME"));
        assert_eq!(loaded.active_panel, Panel::Chart);
        assert!(loaded.welcome_dismissed);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert!(loaded.last_ticker.is_none());
        assert!(!loaded.welcome_dismissed);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("valulens_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.active_panel, Panel::Snapshot);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
