use crate::state::{AvailableState, Package, PackagesState};

use super::rank_packages;

/// What: Toggle the transient mark on an Available entry ahead of a transfer.
///
/// Inputs:
/// - `app`: Mutable step state
/// - `name`: Package name as displayed
///
/// Output:
/// - The name is marked when unmarked and vice versa; names not present in
///   the Available pool are ignored.
pub fn toggle_available_mark(app: &mut PackagesState, name: &str) {
    if !app.available.iter().any(|p| p.name == name) {
        return;
    }
    if !app.available_marked.remove(name) {
        app.available_marked.insert(name.to_string());
    }
}

/// What: Toggle the transient mark on a Chosen entry ahead of a transfer.
///
/// Inputs:
/// - `app`: Mutable step state
/// - `name`: Package name as displayed
///
/// Output:
/// - The name is marked when unmarked and vice versa; names not present in
///   the Chosen pool are ignored.
pub fn toggle_chosen_mark(app: &mut PackagesState, name: &str) {
    if !app.chosen.iter().any(|p| p.name == name) {
        return;
    }
    if !app.chosen_marked.remove(name) {
        app.chosen_marked.insert(name.to_string());
    }
}

/// Move every Available entry matching `pred` into the Chosen pool.
///
/// Names already chosen are dropped rather than duplicated (case-insensitive
/// dedup). Both pools are re-ranked afterwards and the Chosen pool is marked
/// dirty for the next form-store commit.
fn transfer_to_chosen<F>(app: &mut PackagesState, pred: F)
where
    F: Fn(&Package) -> bool,
{
    let mut kept: Vec<Package> = Vec::with_capacity(app.available.len());
    let mut added = 0usize;
    for p in app.available.drain(..) {
        if pred(&p) {
            if !app
                .chosen
                .iter()
                .any(|c| c.name.eq_ignore_ascii_case(&p.name))
            {
                app.chosen.push(p);
                added += 1;
            }
        } else {
            kept.push(p);
        }
    }
    app.available = kept;
    if added > 0 {
        app.chosen_dirty = true;
    }
    rank_packages(&mut app.available, &app.input);
    rank_packages(&mut app.chosen, "");
    tracing::debug!(
        added,
        chosen = app.chosen.len(),
        available = app.available.len(),
        "packages added to image"
    );
}

/// What: Move the marked Available packages into the Chosen pool.
///
/// Inputs:
/// - `app`: Mutable step state; consumes and clears `available_marked`
///
/// Output:
/// - Marked packages leave the Available pool and join the Chosen pool
///   (idempotent per name); both pools are re-ranked.
///
/// Details:
/// - Marks naming packages no longer present in the Available pool are
///   silently dropped; the pool may have been refreshed since they were set.
pub fn add_selected(app: &mut PackagesState) {
    let marked: Vec<String> = app.available_marked.drain().collect();
    if marked.is_empty() {
        return;
    }
    transfer_to_chosen(app, |p| {
        marked.iter().any(|m| m.eq_ignore_ascii_case(&p.name))
    });
}

/// What: Move the entire Available pool into the Chosen pool.
///
/// Inputs:
/// - `app`: Mutable step state
///
/// Output:
/// - Available empties; Chosen gains every entry not already present; the
///   active Available marks are cleared.
pub fn add_all(app: &mut PackagesState) {
    app.available_marked.clear();
    transfer_to_chosen(app, |_| true);
}

/// What: Remove the marked Chosen packages from the image.
///
/// Inputs:
/// - `app`: Mutable step state; consumes and clears `chosen_marked`
///
/// Output:
/// - Marked packages leave the Chosen pool. They are not re-inserted into
///   the displayed Available pool, which reflects a point-in-time query
///   result; they become eligible again on the next search.
pub fn remove_selected(app: &mut PackagesState) {
    let marked: Vec<String> = app.chosen_marked.drain().collect();
    if marked.is_empty() {
        return;
    }
    let before = app.chosen.len();
    app.chosen
        .retain(|p| !marked.iter().any(|m| m.eq_ignore_ascii_case(&p.name)));
    if app.chosen.len() != before {
        app.chosen_dirty = true;
    }
    rank_packages(&mut app.chosen, "");
    tracing::debug!(
        removed = before - app.chosen.len(),
        chosen = app.chosen.len(),
        "packages removed from image"
    );
}

/// What: Empty the Chosen pool.
///
/// Inputs:
/// - `app`: Mutable step state
///
/// Output:
/// - Chosen and its marks are cleared; the Available pool is left untouched.
pub fn remove_all(app: &mut PackagesState) {
    app.chosen_marked.clear();
    let removed = app.chosen.len();
    if removed > 0 {
        app.chosen_dirty = true;
    }
    app.chosen.clear();
    tracing::debug!(removed, chosen = 0usize, "packages removed from image");
}

/// What: Set the client-side filter over the Chosen pool.
///
/// Inputs:
/// - `app`: Mutable step state
/// - `text`: Filter text; empty shows the full pool
///
/// Output:
/// - Only the filter field changes; no network access, no Available changes.
pub fn set_chosen_filter(app: &mut PackagesState, text: &str) {
    app.chosen_filter = text.to_string();
}

/// What: Clear the Chosen pool filter.
pub fn reset_chosen_filter(app: &mut PackagesState) {
    app.chosen_filter.clear();
}

/// What: Return the Chosen pool to its default empty-filter state and clear
/// the current Available query and results.
///
/// Inputs:
/// - `app`: Mutable step state
///
/// Output:
/// - Available pool returns to `Uninitialized` (the prompt state, distinct
///   from zero results); query text, truncation, exact match, and marks are
///   all cleared. The Chosen pool itself is untouched.
pub fn reset_available(app: &mut PackagesState) {
    app.input.clear();
    app.available.clear();
    app.available_marked.clear();
    app.truncated = false;
    app.exact_match = None;
    app.available_state = AvailableState::Uninitialized;
}

/// What: Compute the Chosen entries currently visible under the filter.
///
/// Inputs:
/// - `app`: Step state
///
/// Output:
/// - A ranked copy of the Chosen pool restricted to names containing the
///   filter text (case-insensitive); the full pool when the filter is empty.
#[must_use]
pub fn visible_chosen(app: &PackagesState) -> Vec<Package> {
    let needle = app.chosen_filter.trim().to_lowercase();
    let mut items: Vec<Package> = if needle.is_empty() {
        app.chosen.clone()
    } else {
        app.chosen
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    };
    rank_packages(&mut items, &app.chosen_filter);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(name: &str, summary: &str) -> Package {
        Package {
            name: name.to_string(),
            summary: summary.to_string(),
            source: crate::state::Source::Distro,
        }
    }

    fn populated(app: &mut PackagesState, names: &[(&str, &str)]) {
        app.available = names.iter().map(|(n, s)| pkg(n, s)).collect();
        app.available_state = AvailableState::Populated;
    }

    #[test]
    /// What: Marked packages move from Available to Chosen and marks clear
    ///
    /// - Input: Three available packages, two marked
    /// - Output: Chosen holds the two, Available keeps the third, no marks left
    fn add_selected_moves_marked() {
        let mut app = PackagesState::default();
        app.input = "test".into();
        populated(
            &mut app,
            &[
                ("test", "summary for test package"),
                ("testPkg", "test package summary"),
                ("lib-test", "lib-test package summary"),
            ],
        );
        toggle_available_mark(&mut app, "test");
        toggle_available_mark(&mut app, "lib-test");
        add_selected(&mut app);
        let chosen: Vec<&str> = app.chosen.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(chosen, vec!["lib-test", "test"]);
        assert_eq!(app.available.len(), 1);
        assert_eq!(app.available[0].name, "testPkg");
        assert!(app.available_marked.is_empty());
        assert!(app.chosen_dirty);
    }

    #[test]
    /// What: Adding a name already chosen is a no-op for that name
    ///
    /// - Input: Chosen contains "Test"; available offers "test"
    /// - Output: One chosen entry, available entry consumed, pool not
    ///   marked dirty (membership did not change)
    fn add_dedup_is_case_insensitive() {
        let mut app = PackagesState::default();
        app.chosen = vec![pkg("Test", "summary for test package")];
        populated(&mut app, &[("test", "summary for test package")]);
        add_all(&mut app);
        assert_eq!(app.chosen.len(), 1);
        assert!(app.available.is_empty());
        assert!(!app.chosen_dirty);
    }

    #[test]
    /// What: Marks for names missing from the pool are ignored
    ///
    /// - Input: Mark toggled for a name the pool does not contain
    /// - Output: Nothing is marked, transfer is a no-op
    fn mark_unknown_name_is_noop() {
        let mut app = PackagesState::default();
        populated(&mut app, &[("test", "summary for test package")]);
        toggle_available_mark(&mut app, "ghost");
        assert!(app.available_marked.is_empty());
        add_selected(&mut app);
        assert!(app.chosen.is_empty());
        assert_eq!(app.available.len(), 1);
    }

    #[test]
    /// What: Add all then remove all leaves the Chosen pool as it started
    ///
    /// - Input: Empty chosen pool; three available packages
    /// - Output: Chosen empty again; Available keeps reflecting the last
    ///   search (not reconstructed)
    fn add_all_remove_all_round_trip() {
        let mut app = PackagesState::default();
        app.input = "test".into();
        populated(
            &mut app,
            &[
                ("test", "summary for test package"),
                ("testPkg", "test package summary"),
                ("lib-test", "lib-test package summary"),
            ],
        );
        add_all(&mut app);
        assert_eq!(app.chosen.len(), 3);
        assert!(app.available.is_empty());
        app.chosen_dirty = false;
        toggle_chosen_mark(&mut app, "test");
        remove_all(&mut app);
        assert!(app.chosen.is_empty());
        assert!(app.available.is_empty());
        assert!(app.chosen_marked.is_empty());
        assert!(app.chosen_dirty);
    }

    #[test]
    /// What: Removing chosen packages never resurrects Available entries
    ///
    /// - Input: Chosen pool from a previous search; one marked for removal
    /// - Output: Entry leaves Chosen, Available stays empty until re-search
    fn remove_selected_does_not_repopulate_available() {
        let mut app = PackagesState::default();
        app.chosen = vec![
            pkg("test", "summary for test package"),
            pkg("testPkg", "test package summary"),
        ];
        toggle_chosen_mark(&mut app, "testPkg");
        remove_selected(&mut app);
        assert_eq!(app.chosen.len(), 1);
        assert_eq!(app.chosen[0].name, "test");
        assert!(app.available.is_empty());
        assert!(app.chosen_marked.is_empty());
        assert!(app.chosen_dirty);
    }

    #[test]
    /// What: Chosen filter narrows the visible pool and clears back to full
    ///
    /// - Input: Three chosen packages, exactly one containing "lib"
    /// - Output: One visible while filtered; three after the filter clears
    fn chosen_filter_narrows_and_restores() {
        let mut app = PackagesState::default();
        app.chosen = vec![
            pkg("lib-test", "lib-test package summary"),
            pkg("test", "summary for test package"),
            pkg("testPkg", "test package summary"),
        ];
        set_chosen_filter(&mut app, "lib");
        let visible = visible_chosen(&app);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "lib-test");
        reset_chosen_filter(&mut app);
        assert_eq!(visible_chosen(&app).len(), 3);
    }

    #[test]
    /// What: Filter matching nothing yields an empty view, not an error
    ///
    /// - Input: Filter "asdf" over a non-empty chosen pool
    /// - Output: Zero visible entries; pool membership unchanged
    fn chosen_filter_no_match_is_empty_view() {
        let mut app = PackagesState::default();
        app.chosen = vec![pkg("test", "summary for test package")];
        set_chosen_filter(&mut app, "asdf");
        assert!(visible_chosen(&app).is_empty());
        assert_eq!(app.chosen.len(), 1);
    }

    #[test]
    /// What: Resetting Available returns to the uninitialized prompt state
    ///
    /// - Input: Populated pool with truncation and an exact match recorded
    /// - Output: Cleared query, results, flags, and marks; Chosen untouched
    fn reset_available_clears_to_uninitialized() {
        let mut app = PackagesState::default();
        app.input = "testPkg".into();
        populated(&mut app, &[("testPkg-128", "test package summary")]);
        app.truncated = true;
        app.exact_match = Some("testPkg-128".into());
        app.chosen = vec![pkg("test", "summary for test package")];
        toggle_available_mark(&mut app, "testPkg-128");
        reset_available(&mut app);
        assert!(app.input.is_empty());
        assert!(app.available.is_empty());
        assert!(!app.truncated);
        assert!(app.exact_match.is_none());
        assert!(app.available_marked.is_empty());
        assert_eq!(app.available_state, AvailableState::Uninitialized);
        assert_eq!(app.chosen.len(), 1);
    }
}
