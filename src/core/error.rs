//! Defines the custom error types for the navigation core.

use thiserror::Error;

/// An opaque error reported by the filesystem service collaborator.
///
/// The service contract only promises a generic error per request, so this
/// carries the message and nothing else.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ServiceError(pub String);

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The primary error type for navigation and search operations.
///
/// Every filesystem-service failure is handled locally by the controller that
/// issued the request and converted into one of these variants; none escape
/// as panics or unhandled faults.
#[derive(Debug, Error)]
pub enum NavError {
    /// The service could not produce a directory listing.
    #[error("failed to fetch directory listing: {0}")]
    FetchFailed(#[source] ServiceError),

    /// A requested move could not be completed. Not retried.
    #[error("requested move could not be completed: {0}")]
    NavigationFailed(#[source] ServiceError),

    /// A find-file query could not be completed. The last good result set
    /// stays in place.
    #[error("search query could not be completed: {0}")]
    SearchFailed(#[source] ServiceError),

    /// Forward navigation was requested with no recorded history.
    #[error("forward navigation requested with no recorded history")]
    EmptyHistory,

    /// The current directory and its parents could not be listed within the
    /// configured fallback budget. Terminal: the client state is left on the
    /// last good listing.
    #[error("directory and its parents are unreachable: {0}")]
    Unreachable(#[source] ServiceError),
}
