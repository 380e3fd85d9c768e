//! Contains the coordinator for asynchronous find-file queries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::service::FilesystemService;
use super::state::{SearchResultSet, SearchStore};
use crate::core::{NavError, SearchQuery};

/// Issues search requests against the filesystem service and reconciles
/// their results into the [`SearchStore`].
///
/// Queries may overlap: there is no cancellation, but each query carries a
/// strictly increasing issue sequence and a response is discarded whenever a
/// response to a later-issued query has already been applied. The observable
/// result is issue-order wins, regardless of completion order.
pub struct SearchCoordinator {
    service: Arc<dyn FilesystemService>,
    store: Arc<SearchStore>,
    issue_seq: AtomicU64,
    /// Highest issue sequence whose response has been applied.
    applied_seq: Mutex<u64>,
}

impl SearchCoordinator {
    pub fn new(service: Arc<dyn FilesystemService>, store: Arc<SearchStore>) -> Self {
        Self {
            service,
            store,
            issue_seq: AtomicU64::new(0),
            applied_seq: Mutex::new(0),
        }
    }

    /// Runs `query` and, unless the response has gone stale, wholesale-
    /// replaces the result set with the hits.
    ///
    /// The previous result set stays visible while the query is in flight;
    /// there is no eager clearing, so keystroke-driven searches do not
    /// flicker. On failure the previous results are likewise untouched and
    /// [`NavError::SearchFailed`] is logged and returned.
    pub async fn search(&self, query: SearchQuery) -> Result<(), NavError> {
        let seq = self.issue_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let outcome = self.service.find_file(&query).await;

        let mut applied = self
            .applied_seq
            .lock()
            .expect("Mutex was poisoned. This should not happen.");

        let results = match outcome {
            Ok(results) => results,
            Err(err) => {
                // A failure of a query the user has already superseded is not
                // worth surfacing; only the newest query's fate matters.
                if *applied >= seq {
                    tracing::debug!(seq, applied = *applied, "discarding failure of superseded search");
                    return Ok(());
                }
                tracing::warn!(query = %query.text, error = %err, "find-file query failed");
                return Err(NavError::SearchFailed(err));
            }
        };
        if *applied >= seq {
            tracing::debug!(seq, applied = *applied, "discarding out-of-order search response");
            return Ok(());
        }
        *applied = seq;
        self.store.replace(SearchResultSet { results });
        Ok(())
    }
}
