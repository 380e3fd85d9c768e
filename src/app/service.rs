//! Defines the abstraction over the external filesystem service.

use async_trait::async_trait;

use crate::core::{FileEntry, FolderListing, SearchQuery, ServiceError};

/// The request/response contract with the filesystem service collaborator.
///
/// The service performs the actual directory listing, path resolution, and
/// file search; this crate only sequences requests to it and reconciles the
/// responses into client-visible state. Timeouts are the service's
/// responsibility, not the caller's.
#[async_trait]
pub trait FilesystemService: Send + Sync {
    /// Lists the directory the service currently considers "current".
    async fn get_current_folder(&self) -> Result<FolderListing, ServiceError>;

    /// Moves the current location to `path`, or to `path`'s parent when
    /// `to_parent` is set.
    async fn move_to_folder(&self, path: &str, to_parent: bool) -> Result<(), ServiceError>;

    /// Moves to the parent of the current directory and returns the path
    /// that was left behind.
    async fn move_to_parent_folder(&self) -> Result<String, ServiceError>;

    /// Searches for entries matching `query`.
    async fn find_file(&self, query: &SearchQuery) -> Result<Vec<FileEntry>, ServiceError>;
}
