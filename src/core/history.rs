//! The forward-navigation history stack.

use serde::{Deserialize, Serialize};

/// Ordered record of directories left via "go to parent", enabling "go
/// forward" to revisit them. Last pushed is the next to pop.
///
/// `pop` returns an explicit `Option` rather than reading past the end of the
/// backing storage, so an empty stack is always visible to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStack(Vec<String>);

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `path` to the end of the stack.
    pub fn push(&mut self, path: impl Into<String>) {
        self.0.push(path.into());
    }

    /// Removes and returns the last element, or `None` on an empty stack.
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// The path a forward navigation would revisit next, without removing it.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Empties the stack. Used when a direct navigation into a child makes
    /// the recorded forward history meaningless.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The recorded paths, oldest first.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
