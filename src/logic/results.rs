use crate::state::{AvailableState, PackagesState, SearchResults};

use super::rank_packages;

/// What: Apply a search result to the Available pool.
///
/// Inputs:
/// - `app`: Mutable step state
/// - `new_results`: Outcome correlated to a prior query id
///
/// Output:
/// - Replaces the Available pool wholesale and selects the terminal state:
///   `Populated`, `Empty` (zero matches), or `Failed` (catalog error).
///
/// Details:
/// - Results whose id does not match `latest_query_id` are stale and are
///   discarded without touching any state (last query wins).
/// - Packages already in the Chosen pool are filtered out so a name is never
///   visible on both sides at once.
/// - Active Available marks are cleared; the refreshed pool may no longer
///   contain the marked names.
pub fn handle_search_results(app: &mut PackagesState, new_results: SearchResults) {
    if new_results.id != app.latest_query_id {
        tracing::debug!(
            id = new_results.id,
            latest = app.latest_query_id,
            "stale search results discarded"
        );
        return;
    }
    app.available_marked.clear();
    match new_results.outcome {
        Ok(page) => {
            let mut items = page.items;
            items.retain(|p| !app.is_chosen(&p.name));
            rank_packages(&mut items, &app.input);
            app.truncated = page.truncated;
            // Drop the badge when the exact match is already chosen.
            app.exact_match = page
                .exact_match
                .map(|p| p.name)
                .filter(|n| items.iter().any(|p| &p.name == n));
            app.available_state = if items.is_empty() {
                AvailableState::Empty
            } else {
                AvailableState::Populated
            };
            tracing::debug!(
                id = new_results.id,
                results = items.len(),
                truncated = app.truncated,
                "search results applied"
            );
            app.available = items;
        }
        Err(e) => {
            tracing::warn!(id = new_results.id, error = %e, "search failed");
            app.available = Vec::new();
            app.truncated = false;
            app.exact_match = None;
            app.available_state = AvailableState::Failed;
        }
    }
}
