pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::SearchQuery;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavConfig {
    /// How many times a failed directory listing may fall back to the parent
    /// directory before the operation terminates as unreachable.
    pub parent_fallback_attempts: u32,
    /// Default search scopes applied to queries built via
    /// [`NavConfig::default_query`].
    pub include_files: bool,
    pub include_folders: bool,
    pub include_links: bool,
}

impl NavConfig {
    pub fn load() -> Result<Self> {
        settings::load_config(None)
    }

    /// Builds a query for `text` over the configured default scopes.
    pub fn default_query(&self, text: impl Into<String>) -> SearchQuery {
        SearchQuery {
            text: text.into(),
            include_files: self.include_files,
            include_folders: self.include_folders,
            include_links: self.include_links,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            parent_fallback_attempts: 1,
            include_files: true,
            include_folders: true,
            include_links: true,
        }
    }
}
