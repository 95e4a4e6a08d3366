//! Background search worker.
//!
//! Receives debounced query inputs from the step's event loop, runs the
//! catalog search, and sends the outcome back tagged with the originating
//! query id. The worker never touches [`crate::state::PackagesState`]; stale
//! responses are discarded at apply time by
//! [`crate::logic::handle_search_results`].

use tokio::{
    select,
    sync::mpsc,
    time::{Duration, sleep},
};

use crate::catalog::{self, PackageCatalog};
use crate::state::{QueryInput, SearchResults};

/// Debounce window collapsing bursts of query edits into one search.
const DEBOUNCE_MS: u64 = 250;

/// What: Spawn the background worker serving search queries.
///
/// Inputs:
/// - `catalog`: Resolved fetch backend for this session
/// - `query_rx`: Channel receiver for search queries
/// - `result_tx`: Channel sender for search results
///
/// Details:
/// - Bursts of queries within the debounce window collapse to the newest one;
///   superseded queries are never fetched.
/// - Catalog failures are stringified into the result outcome rather than
///   terminating the worker.
/// - The task exits when either channel closes.
pub fn spawn_search_worker<C>(
    catalog: C,
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    result_tx: mpsc::UnboundedSender<SearchResults>,
) where
    C: PackageCatalog + Send + Sync + 'static,
{
    tokio::spawn(async move {
        loop {
            let Some(mut latest) = query_rx.recv().await else {
                break;
            };
            loop {
                select! {
                    Some(new_q) = query_rx.recv() => { latest = new_q; }
                    () = sleep(Duration::from_millis(DEBOUNCE_MS)) => { break; }
                }
            }
            let outcome = catalog::search_catalog(&catalog, &latest.text)
                .await
                .map_err(|e| e.to_string());
            if result_tx
                .send(SearchResults {
                    id: latest.id,
                    outcome,
                })
                .is_err()
            {
                break;
            }
        }
        tracing::debug!("search worker stopped");
    });
}
