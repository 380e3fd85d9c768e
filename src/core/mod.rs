pub mod error;
pub mod history;

use serde::{Deserialize, Serialize};

pub use error::{NavError, ServiceError};
pub use history::HistoryStack;

/// One child of a directory, or one search hit.
///
/// Entries are immutable once received from the filesystem service; the
/// controllers only ever replace whole lists of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "filetype")]
    pub file_type: String,
}

/// The response shape of a `get_current_folder` request.
///
/// `is_at_root` carries no serde default on purpose: a payload that omits the
/// field fails deserialization at the service boundary instead of being
/// guessed at, and the failure surfaces as a fetch error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderListing {
    pub name: String,
    #[serde(rename = "files")]
    pub children: Vec<FileEntry>,
    pub is_at_root: bool,
}

/// Parameters of one find-file request. Ephemeral; not persisted across queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "name")]
    pub text: String,
    #[serde(rename = "files")]
    pub include_files: bool,
    #[serde(rename = "folders")]
    pub include_folders: bool,
    #[serde(rename = "links")]
    pub include_links: bool,
}

impl SearchQuery {
    /// A query over all entry kinds, the most common case.
    pub fn all(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            include_files: true,
            include_folders: true,
            include_links: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_entry_uses_wire_field_names() {
        let json = r#"{"name":"a.txt","path":"/docs/a.txt","filetype":"file"}"#;
        let entry: FileEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "a.txt");
        assert_eq!(entry.file_type, "file");
    }

    #[test]
    fn folder_listing_requires_is_at_root() {
        // A service that omits the flag is violating the protocol; this must
        // not silently default to either value.
        let json = r#"{"name":"docs","files":[]}"#;
        assert!(serde_json::from_str::<FolderListing>(json).is_err());
    }

    #[test]
    fn search_query_serializes_to_wire_names() {
        let query = SearchQuery::all("report");
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["name"], "report");
        assert_eq!(value["files"], true);
        assert_eq!(value["folders"], true);
        assert_eq!(value["links"], true);
    }
}
