//! Persisted view preferences
//!
//! Each listing page (keyed by name, e.g. "blog") remembers its view mode,
//! category selection, sort order and search text between runs. Preferences
//! are plain data handed to the query layer; the engine never reads them.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::query::{QueryState, SortOrder};

/// Directory holding per-site state
pub const STATE_DIR: &str = ".folio";

/// Preferences file name, relative to the site base directory
const PREFS_FILE: &str = ".folio/preferences.json";

/// Grid or list presentation of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(format!("unknown view mode '{}' (expected grid or list)", other)),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        })
    }
}

/// Saved view settings for one listing page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPreferences {
    pub view_mode: ViewMode,
    pub selected_categories: BTreeSet<String>,
    pub sort_order: SortOrder,
    pub search_query: String,
}

impl ViewPreferences {
    /// Start a query from these preferences, on the first page
    pub fn to_query(&self) -> QueryState {
        QueryState::new()
            .with_categories(self.selected_categories.iter().cloned())
            .with_search(self.search_query.clone())
            .with_sort(self.sort_order)
    }

    /// Capture the filter settings of a query
    pub fn from_query(query: &QueryState, view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            selected_categories: query.selected_categories().clone(),
            sort_order: query.sort_order(),
            search_query: query.search_query().to_string(),
        }
    }
}

/// Preference store kept on disk as JSON
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PreferenceStore {
    /// Version of the store format
    pub version: u32,
    /// Preferences keyed by page name
    pub pages: BTreeMap<String, ViewPreferences>,
}

impl PreferenceStore {
    /// Current store format version
    const VERSION: u32 = 1;

    /// Create a new store with version set
    pub fn new() -> Self {
        Self {
            version: Self::VERSION,
            ..Default::default()
        }
    }

    /// Load the store from disk, or start an empty one
    pub fn load(base_dir: &Path) -> Self {
        let path = base_dir.join(PREFS_FILE);
        if let Ok(content) = fs::read_to_string(&path) {
            match serde_json::from_str::<PreferenceStore>(&content) {
                Ok(store) if store.version == Self::VERSION => return store,
                Ok(_) => tracing::info!("Preference store version mismatch, starting fresh"),
                Err(e) => tracing::warn!("Ignoring unreadable preferences {:?}: {}", path, e),
            }
        }
        Self::new()
    }

    /// Save the store to disk
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        fs::create_dir_all(base_dir.join(STATE_DIR))?;

        let path = base_dir.join(PREFS_FILE);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        tracing::debug!("Saved preferences to {:?}", path);
        Ok(())
    }

    /// Preferences for `page`, defaults when none were saved
    pub fn get(&self, page: &str) -> ViewPreferences {
        self.pages.get(page).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, page: &str, prefs: ViewPreferences) {
        self.pages.insert(page.to_string(), prefs);
    }
}
