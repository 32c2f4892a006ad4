///! Display theme preference, persisted under one storage key.

use anyhow::Result;
use tracing::warn;

use crate::storage::{KvStore, THEME_KEY};

/// Display theme. Light is the documented default for an absent or
/// unrecognized stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn from_stored(value: &str) -> Theme {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            other => {
                warn!("Unrecognized stored theme '{}', defaulting to light", other);
                Theme::Light
            }
        }
    }
}

/// Read the persisted theme; absent or unreadable values default to light.
pub fn load_theme<S: KvStore>(storage: &S) -> Theme {
    match storage.load(THEME_KEY) {
        Ok(Some(value)) => Theme::from_stored(value.trim()),
        Ok(None) => Theme::default(),
        Err(e) => {
            warn!("Failed to load theme preference: {:#}", e);
            Theme::default()
        }
    }
}

pub fn save_theme<S: KvStore>(storage: &S, theme: Theme) -> Result<()> {
    storage.save(THEME_KEY, theme.as_str())
}
