//! Core state types for the package selection engine.
//!
//! This module defines the data structures shared by the logic, catalog, and
//! worker layers: the package descriptor, search coordination types, and the
//! central [`PackagesState`] container mutated by the logic layer on behalf of
//! the wizard's packages step. The Chosen pool is serializable because it is
//! persisted in the wizard form store between step visits.
use std::collections::HashSet;

/// Provenance of a package.
///
/// Indicates whether a package comes from the base distribution index or from
/// a user-configured third-party content source.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Source {
    /// Base distribution repository.
    #[default]
    Distro,
    /// Custom content source configured by the user.
    Custom,
}

/// Minimal package descriptor used in both pools.
///
/// Identified by a unique name; the summary is a one-line description
/// suitable for list display.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Package {
    /// Canonical package name.
    pub name: String,
    /// One-line summary as reported by the catalog.
    pub summary: String,
    /// Origin of the package (distribution index or content source).
    #[serde(default)]
    pub source: Source,
}

/// Search query sent to the background search worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Raw query text entered by the user.
    pub text: String,
}

/// One catalog query result as produced by the search algorithm.
#[derive(Clone, Debug, Default)]
pub struct CatalogPage {
    /// Matching packages; when truncated, the promoted exact match (if any)
    /// has already been moved to the front.
    pub items: Vec<Package>,
    /// True when the index reported more matches than the bounded fetch
    /// returned.
    pub truncated: bool,
    /// Literal exact-name match located via the unbounded fetch, kept
    /// separately so callers can badge it.
    pub exact_match: Option<Package>,
}

/// Results corresponding to a prior [`QueryInput`].
#[derive(Clone, Debug)]
pub struct SearchResults {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Fetched page, or the catalog failure rendered as text.
    pub outcome: Result<CatalogPage, String>,
}

/// Lifecycle of the Available pool.
///
/// `Populated`, `Empty`, and `Failed` are mutually exclusive terminal states
/// that fully replace one another; a reset returns to `Uninitialized` and a
/// new search re-enters `Searching` from any state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvailableState {
    /// No search has been issued yet (prompt state).
    #[default]
    Uninitialized,
    /// A search is in flight.
    Searching,
    /// The last search returned at least one package.
    Populated,
    /// The last search matched nothing.
    Empty,
    /// The last search failed at the catalog boundary.
    Failed,
}

/// State of the packages step, shared by the logic and worker layers.
///
/// Mutated exclusively by the single event-processing actor that owns it;
/// the search worker communicates through channels and never touches this
/// structure directly.
#[derive(Debug)]
pub struct PackagesState {
    /// Current search input for the Available pool.
    pub input: String,
    /// Available pool: the last query result minus anything already chosen,
    /// stored in rank order for the active query.
    pub available: Vec<Package>,
    /// Lifecycle state of the Available pool.
    pub available_state: AvailableState,
    /// Whether the index reported more matches than were returned.
    pub truncated: bool,
    /// Name of the package promoted by the exact-match escape hatch, if any.
    pub exact_match: Option<String>,
    /// Chosen pool: packages committed to the image, unique by name,
    /// stored name-sorted.
    pub chosen: Vec<Package>,
    /// Client-side substring filter over the Chosen pool.
    pub chosen_filter: String,
    /// Names marked in the Available pool ahead of a transfer.
    pub available_marked: HashSet<String>,
    /// Names marked in the Chosen pool ahead of a transfer.
    pub chosen_marked: HashSet<String>,
    /// Identifier of the query whose results the pools reflect.
    pub latest_query_id: u64,
    /// Next query identifier to allocate.
    pub next_query_id: u64,
    /// Dirty flag indicating the Chosen pool needs to be written back to the
    /// wizard form store.
    pub chosen_dirty: bool,
}

impl Default for PackagesState {
    /// Construct an empty step state with the query-id counter primed so the
    /// first allocated id can never collide with the initial `latest_query_id`.
    fn default() -> Self {
        Self {
            input: String::new(),
            available: Vec::new(),
            available_state: AvailableState::Uninitialized,
            truncated: false,
            exact_match: None,
            chosen: Vec::new(),
            chosen_filter: String::new(),
            available_marked: HashSet::new(),
            chosen_marked: HashSet::new(),
            latest_query_id: 0,
            next_query_id: 1,
            chosen_dirty: false,
        }
    }
}

impl PackagesState {
    /// Rehydrate a fresh step state from the Chosen pool persisted in the
    /// wizard form store (editing or recreating an image).
    #[must_use]
    pub fn with_chosen(mut chosen: Vec<Package>) -> Self {
        crate::logic::rank_packages(&mut chosen, "");
        Self {
            chosen,
            ..Self::default()
        }
    }

    /// True when `name` is already committed to the image.
    #[must_use]
    pub fn is_chosen(&self, name: &str) -> bool {
        self.chosen.iter().any(|p| p.name.eq_ignore_ascii_case(name))
    }
}
