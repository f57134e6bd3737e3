use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::theme::Theme;

/// Persisted user preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// Unset until the user toggles once; the ambient scheme applies until then.
    #[serde(default)]
    pub dark_mode: Option<bool>,
}

impl Preferences {
    pub fn theme(&self, ambient: Option<Theme>) -> Theme {
        match self.dark_mode {
            Some(dark) => Theme::from_dark_mode(dark),
            None => ambient.unwrap_or(Theme::Dark),
        }
    }
}

pub trait PreferenceStore {
    fn load(&self) -> Preferences;
    fn save(&self, prefs: &Preferences) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "keypace") {
            pd.config_dir().join("preferences.json")
        } else {
            PathBuf::from("keypace_preferences.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FilePreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Preferences {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "no stored preferences");
                return Preferences::default();
            }
        };
        match serde_json::from_slice::<Preferences>(&bytes) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring unreadable preferences"
                );
                Preferences::default()
            }
        }
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(prefs)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Keeps preferences in memory only
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    prefs: RefCell<Preferences>,
}

impl MemoryPreferenceStore {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            prefs: RefCell::new(prefs),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Preferences {
        self.prefs.borrow().clone()
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        *self.prefs.borrow_mut() = prefs.clone();
        Ok(())
    }
}
