use std::{fmt, str::FromStr, sync::Arc};

use super::{error::StoreError, storage::LocalStorage};

/// Local-storage key holding the theme name
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
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
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Persists the selected UI theme next to the favorites
#[derive(Clone)]
pub struct ThemeStore {
    storage: Arc<dyn LocalStorage>,
}

impl ThemeStore {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    /// Stored theme, `Light` when unset or unreadable
    pub fn load(&self) -> Theme {
        match self.storage.get_item(THEME_KEY) {
            Ok(Some(name)) => name.parse().unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read theme");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<(), StoreError> {
        self.storage.set_item(THEME_KEY, theme.as_str())
    }
}
