//! Wizard form store interface.
//!
//! The durable copy of the Chosen pool belongs to the wizard's shared form
//! state, which outlives this step across back/forward navigation and
//! image-recreate flows. The engine reads an initial pool from it on mount
//! and commits back whenever the pool is dirty.

use std::fs;
use std::path::Path;

use crate::state::{Package, PackagesState};

/// What: Read the Chosen pool persisted by the wizard form store.
///
/// Inputs:
/// - `path`: Location of the serialized pool
///
/// Output:
/// - The persisted packages; an empty pool when the file is missing or
///   unreadable (a fresh wizard run).
#[must_use]
pub fn initial_chosen(path: &Path) -> Vec<Package> {
    let Ok(text) = fs::read_to_string(path) else {
        return Vec::new();
    };
    match serde_json::from_str(&text) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "unreadable chosen pool; starting empty"
            );
            Vec::new()
        }
    }
}

/// What: Commit the Chosen pool to the form store if marked dirty.
///
/// Inputs:
/// - `app`: Step state whose `chosen` and `chosen_dirty` are used
/// - `path`: Location of the serialized pool
///
/// Output:
/// - Writes the pool as JSON and clears the dirty flag. The flag clears even
///   on a failed write to avoid retry storms; the next mutation re-marks it.
pub fn maybe_commit_chosen(app: &mut PackagesState, path: &Path) {
    if !app.chosen_dirty {
        return;
    }
    if let Ok(s) = serde_json::to_string(&app.chosen) {
        match fs::write(path, &s) {
            Ok(()) => {
                tracing::debug!(
                    path = %path.display(),
                    bytes = s.len(),
                    packages = app.chosen.len(),
                    "chosen pool committed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to commit chosen pool"
                );
            }
        }
        app.chosen_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Source;

    fn pkg(name: &str) -> Package {
        Package {
            name: name.to_string(),
            summary: format!("{name} package summary"),
            source: Source::Distro,
        }
    }

    #[test]
    /// What: Committed pool survives a reload
    ///
    /// - Input: Dirty state with two chosen packages; commit then reload
    /// - Output: Same membership back; dirty flag cleared
    fn commit_and_reload_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("chosen.json");
        let mut app = PackagesState::default();
        app.chosen = vec![pkg("test"), pkg("lib-test")];
        app.chosen_dirty = true;
        maybe_commit_chosen(&mut app, &path);
        assert!(!app.chosen_dirty);
        let loaded = initial_chosen(&path);
        let names: Vec<&str> = loaded.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["test", "lib-test"]);
    }

    #[test]
    /// What: A clean state never touches the store
    ///
    /// - Input: Non-dirty state
    /// - Output: No file written
    fn clean_state_skips_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("chosen.json");
        let mut app = PackagesState::default();
        app.chosen = vec![pkg("test")];
        maybe_commit_chosen(&mut app, &path);
        assert!(!path.exists());
    }

    #[test]
    /// What: Missing or corrupt stores rehydrate as an empty pool
    ///
    /// - Input: Absent file; then a file with invalid JSON
    /// - Output: Empty pool both times
    fn missing_or_corrupt_store_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("chosen.json");
        assert!(initial_chosen(&path).is_empty());
        fs::write(&path, "not json").expect("write");
        assert!(initial_chosen(&path).is_empty());
    }
}
