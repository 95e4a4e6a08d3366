use tokio::sync::mpsc;

use crate::state::{AvailableState, PackagesState, QueryInput};

/// What: Dispatch the current query text to the search worker with a fresh id.
///
/// Inputs:
/// - `app`: Mutable step state; updates `next_query_id` and `latest_query_id`
/// - `query_tx`: Channel to send the `QueryInput`
///
/// Output:
/// - Sends a `QueryInput` with an incremented id and moves the Available pool
///   to `Searching`. A query that trims to empty is not sent; it resets the
///   pool to its uninitialized prompt state instead.
///
/// Details:
/// - The id lets apply-time code discard stale responses, so a newer search
///   always wins over one still in flight.
pub fn send_query(app: &mut PackagesState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    if app.input.trim().is_empty() {
        super::reset_available(app);
        return;
    }
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    app.available_state = AvailableState::Searching;
    tracing::debug!(id, query = %app.input, "search dispatched");
    let _ = query_tx.send(QueryInput {
        id,
        text: app.input.clone(),
    });
}
