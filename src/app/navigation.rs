//! Contains the controller that orchestrates transitions between directories.
//!
//! The controller is the only writer of its [`DirectoryStore`]. Every
//! operation is a transition guarded by the filesystem service's response;
//! listings are tagged with a monotonic sequence number so a response that
//! has been overtaken by a newer request is discarded instead of clobbering
//! fresher state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::service::FilesystemService;
use super::state::{DirectoryState, DirectoryStore};
use crate::config::NavConfig;
use crate::core::NavError;

pub struct NavigationController {
    service: Arc<dyn FilesystemService>,
    store: Arc<DirectoryStore>,
    config: NavConfig,
    /// Sequence of the most recently issued listing request. A response only
    /// applies while its sequence is still the newest one.
    listing_seq: AtomicU64,
}

impl NavigationController {
    pub fn new(
        service: Arc<dyn FilesystemService>,
        store: Arc<DirectoryStore>,
        config: NavConfig,
    ) -> Self {
        Self {
            service,
            store,
            config,
            listing_seq: AtomicU64::new(0),
        }
    }

    /// Re-fetches the listing of the directory the service is currently in.
    ///
    /// `children` is cleared synchronously before the request goes out, so a
    /// fetch in progress is observable as an empty set. On success the
    /// listing's name, children, and root flag replace the state in a single
    /// update, preserving the history stack.
    ///
    /// On a fetch failure the controller falls back to the parent directory,
    /// at most [`NavConfig::parent_fallback_attempts`] times. When the budget
    /// is exhausted, or the parent move itself is rejected, the state from
    /// before this call is restored and [`NavError::Unreachable`] is
    /// returned.
    pub async fn refresh_current_directory(&self) -> Result<(), NavError> {
        let before = self.store.get();
        let budget = self.config.parent_fallback_attempts;
        let mut fallbacks_left = budget;

        loop {
            let seq = self.listing_seq.fetch_add(1, Ordering::SeqCst) + 1;

            let mut loading = self.store.get();
            loading.children.clear();
            self.store.replace(loading);

            let err = match self.service.get_current_folder().await {
                Ok(listing) => {
                    if self.listing_seq.load(Ordering::SeqCst) != seq {
                        tracing::debug!(seq, "discarding stale directory listing");
                        return Ok(());
                    }
                    let mut next = self.store.get();
                    next.current_name = listing.name;
                    next.children = listing.children;
                    next.is_at_root = listing.is_at_root;
                    self.store.replace(next);
                    return Ok(());
                }
                Err(err) => err,
            };

            // A failure to a superseded request is just as stale as a
            // listing: acting on it would move the service around behind the
            // newer navigation's back.
            if self.listing_seq.load(Ordering::SeqCst) != seq {
                tracing::debug!(seq, "discarding stale listing failure");
                return Ok(());
            }

            tracing::warn!(error = %err, "directory listing failed");

            if fallbacks_left == 0 {
                self.restore_if_current(seq, before);
                return Err(if budget == 0 {
                    NavError::FetchFailed(err)
                } else {
                    NavError::Unreachable(err)
                });
            }
            fallbacks_left -= 1;

            if let Err(parent_err) = self.service.move_to_parent_folder().await {
                tracing::warn!(error = %parent_err, "parent fallback also failed");
                self.restore_if_current(seq, before);
                return Err(NavError::Unreachable(parent_err));
            }
            if self.listing_seq.load(Ordering::SeqCst) != seq {
                tracing::debug!(seq, "navigation superseded during parent fallback");
                return Ok(());
            }
            tracing::info!("retrying listing from parent directory");
        }
    }

    /// Moves the current location to `path` (or its parent when `to_parent`)
    /// and refreshes. A direct navigation invalidates the recorded forward
    /// history, so the stack is cleared once the move is accepted.
    ///
    /// If the service rejects the move, the error is logged and returned and
    /// no state changes.
    pub async fn change_directory(&self, path: &str, to_parent: bool) -> Result<(), NavError> {
        self.navigate(path, to_parent, true).await
    }

    /// Moves to the parent of the current directory, pushes the departed path
    /// onto the history stack, and refreshes.
    pub async fn change_to_parent_directory(&self) -> Result<(), NavError> {
        let previous = match self.service.move_to_parent_folder().await {
            Ok(previous) => previous,
            Err(err) => {
                tracing::warn!(error = %err, "move to parent rejected by filesystem service");
                return Err(NavError::NavigationFailed(err));
            }
        };

        // Push before refreshing: the forward entry must survive even when
        // the listing fetch afterwards fails.
        let mut next = self.store.get();
        next.history.push(previous);
        self.store.replace(next);

        self.refresh_current_directory().await
    }

    /// Revisits the most recently departed directory, undoing one parent
    /// navigation.
    ///
    /// With an empty history stack this is a no-op that reports
    /// [`NavError::EmptyHistory`]. The stack entry is only consumed once the
    /// service has accepted the move, so a rejected move leaves the forward
    /// history intact.
    pub async fn move_forward_dir(&self) -> Result<(), NavError> {
        let Some(path) = self.store.get().history.last().map(str::to_string) else {
            tracing::debug!("forward navigation requested with empty history");
            return Err(NavError::EmptyHistory);
        };

        if let Err(err) = self.service.move_to_folder(&path, false).await {
            tracing::warn!(path, error = %err, "forward move rejected by filesystem service");
            return Err(NavError::NavigationFailed(err));
        }

        let mut next = self.store.get();
        next.history.pop();
        self.store.replace(next);

        self.refresh_current_directory().await
    }

    async fn navigate(
        &self,
        path: &str,
        to_parent: bool,
        clear_forward: bool,
    ) -> Result<(), NavError> {
        if let Err(err) = self.service.move_to_folder(path, to_parent).await {
            tracing::warn!(path, error = %err, "move rejected by filesystem service");
            return Err(NavError::NavigationFailed(err));
        }

        if clear_forward {
            let mut next = self.store.get();
            if !next.history.is_empty() {
                next.history.clear();
                self.store.replace(next);
            }
        }

        self.refresh_current_directory().await
    }

    /// Restores `before`, unless a newer listing request has been issued in
    /// the meantime and now owns the state.
    fn restore_if_current(&self, seq: u64, before: DirectoryState) {
        if self.listing_seq.load(Ordering::SeqCst) == seq {
            self.store.replace(before);
        }
    }
}
