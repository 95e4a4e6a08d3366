use crate::state::Package;

/// What: Compute the relevance tier of a package for the active query.
///
/// Inputs:
/// - `pkg`: Candidate package
/// - `query_lower`: Lowercased, trimmed query text (may be empty)
///
/// Output:
/// - 0 when the name starts with the query, 1 when the summary does, 2
///   otherwise; 2 for every package when the query is empty.
#[must_use]
pub fn match_tier(pkg: &Package, query_lower: &str) -> u8 {
    if !query_lower.is_empty() {
        if pkg.name.to_lowercase().starts_with(query_lower) {
            return 0;
        }
        if pkg.summary.to_lowercase().starts_with(query_lower) {
            return 1;
        }
    }
    2
}

/// What: Sort a package sequence by relevance tier, then name.
///
/// Inputs:
/// - `items`: Sequence to sort in place
/// - `query`: Active query text (the pool's own filter; empty disables tiering)
///
/// Output:
/// - `items` ordered tier-ascending, case-insensitive name-ascending within a
///   tier; pure lexicographic by name when `query` trims to empty.
///
/// Details:
/// - Reapplied after every pool mutation, not just at fetch time, because
///   membership changes after the initial fetch.
pub fn rank_packages(items: &mut [Package], query: &str) {
    let ql = query.trim().to_lowercase();
    items.sort_by(|a, b| {
        let ta = match_tier(a, &ql);
        let tb = match_tier(b, &ql);
        if ta != tb {
            return ta.cmp(&tb);
        }
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    });
}
