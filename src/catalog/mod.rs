//! Catalog abstraction and the bounded-search algorithm.
//!
//! A [`PackageCatalog`] answers package queries, bounded when a limit is
//! given. [`search_catalog`] layers the result-cap, truncation, and
//! exact-match escape-hatch semantics on top of any backend.

use std::future::Future;

use crate::state::{CatalogPage, Package};

pub mod http;

/// Boxed-error result used at the catalog seam.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Maximum number of matches requested from a bounded fetch.
pub const RESULT_CAP: usize = 100;

/// A remote package index.
///
/// Implementations are selected once per wizard session (see
/// [`http::select_backend`]); the search algorithm never branches on flag
/// state internally.
pub trait PackageCatalog {
    /// Fetch packages matching `query`, bounded when `limit` is given.
    fn fetch(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> impl Future<Output = Result<Vec<Package>>> + Send;
}

/// What: Execute one search against a catalog with cap and escape-hatch
/// semantics.
///
/// Inputs:
/// - `catalog`: Backend to query
/// - `query`: Non-empty search text (trimmed internally)
///
/// Output:
/// - A [`CatalogPage`]: the bounded matches, a truncation flag, and the
///   promoted exact match when one was located.
///
/// Details:
/// - The bounded fetch requests up to [`RESULT_CAP`] matches. A result below
///   the cap is complete and returns immediately with `truncated = false`.
/// - At the cap, one unbounded fetch is issued whose sole purpose is to
///   locate a literal exact-name match; if found and not already present it
///   is prepended to the bounded sequence. The page stays truncated.
/// - A failure of either fetch fails the whole search.
pub async fn search_catalog<C: PackageCatalog + Sync>(
    catalog: &C,
    query: &str,
) -> Result<CatalogPage> {
    let q = query.trim();
    let bounded = catalog.fetch(q, Some(RESULT_CAP)).await?;
    if bounded.len() < RESULT_CAP {
        return Ok(CatalogPage {
            items: bounded,
            truncated: false,
            exact_match: None,
        });
    }
    tracing::debug!(query = %q, cap = RESULT_CAP, "bounded result at cap; issuing exact-match fetch");
    let all = catalog.fetch(q, None).await?;
    let exact = all.into_iter().find(|p| p.name == q);
    let mut items = bounded;
    if let Some(e) = &exact
        && !items.iter().any(|p| p.name == e.name)
    {
        items.insert(0, e.clone());
    }
    Ok(CatalogPage {
        items,
        truncated: true,
        exact_match: exact,
    })
}
