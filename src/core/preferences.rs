use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, Result, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().trim_matches('"').to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme `{}`", other)),
        }
    }
}

/// Reads and writes the theme preference under [`THEME_KEY`].
pub struct ThemeService;

impl ThemeService {
    /// Stored theme, or the default when absent or unreadable.
    pub fn load(store: &dyn KeyValueStore) -> Theme {
        match store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|err: String| {
                tracing::warn!(error = %err, "ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read theme preference");
                Theme::default()
            }
        }
    }

    pub fn save(store: &dyn KeyValueStore, theme: Theme) -> Result<()> {
        let json = serde_json::to_string(&theme)?;
        store.set(THEME_KEY, &json)
    }

    /// Flips the stored theme and returns the new value.
    pub fn toggle(store: &dyn KeyValueStore) -> Result<Theme> {
        let next = Self::load(store).toggled();
        Self::save(store, next)?;
        Ok(next)
    }
}
