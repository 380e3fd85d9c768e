//! Defines the observable state containers of the navigation core.
//!
//! Each container owns one value and replaces it wholesale on every mutation,
//! so subscribers always observe a consistent snapshot and never a partially
//! updated one. The controllers in this crate are the only writers; consumers
//! hold `subscribe`/`get` and nothing else.

use serde::Serialize;
use tokio::sync::watch;

use crate::core::{FileEntry, HistoryStack};

/// The client-visible state of the currently displayed directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DirectoryState {
    /// Name of the directory the user is currently in.
    pub current_name: String,
    /// Whether the current directory is the root of the exposed tree.
    /// Authoritative only after a successful fetch; never inferred from the
    /// history stack.
    pub is_at_root: bool,
    /// The last successfully fetched listing. Cleared at the moment a new
    /// fetch is initiated, which makes "loading" observable as an empty set.
    pub children: Vec<FileEntry>,
    /// Paths left via parent navigation, in the order a forward navigation
    /// revisits them.
    pub history: HistoryStack,
}

/// The results of the most recently applied search query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResultSet {
    pub results: Vec<FileEntry>,
}

/// Observable container for [`DirectoryState`].
#[derive(Debug)]
pub struct DirectoryStore {
    tx: watch::Sender<DirectoryState>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(DirectoryState::default());
        Self { tx }
    }

    /// Registers an observer. Dropping the receiver unregisters it.
    pub fn subscribe(&self) -> watch::Receiver<DirectoryState> {
        self.tx.subscribe()
    }

    /// A snapshot of the current value.
    pub fn get(&self) -> DirectoryState {
        self.tx.borrow().clone()
    }

    /// Replaces the whole value and notifies subscribers. Writer-side only.
    pub(crate) fn replace(&self, next: DirectoryState) {
        self.tx.send_replace(next);
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Observable container for [`SearchResultSet`].
#[derive(Debug)]
pub struct SearchStore {
    tx: watch::Sender<SearchResultSet>,
}

impl SearchStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SearchResultSet::default());
        Self { tx }
    }

    /// Registers an observer. Dropping the receiver unregisters it.
    pub fn subscribe(&self) -> watch::Receiver<SearchResultSet> {
        self.tx.subscribe()
    }

    /// A snapshot of the current value.
    pub fn get(&self) -> SearchResultSet {
        self.tx.borrow().clone()
    }

    /// Replaces the whole value and notifies subscribers. Writer-side only.
    pub(crate) fn replace(&self, next: SearchResultSet) {
        self.tx.send_replace(next);
    }
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new()
    }
}
