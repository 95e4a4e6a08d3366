//! HTTP catalog backends.
//!
//! Two backends cover the two indexes a wizard session can search: the base
//! distribution index and the user-configured content sources. Which one a
//! session uses is decided once, from the feature flags, by
//! [`select_backend`].

use std::future::Future;

use serde_json::Value;

use crate::flags::FeatureFlags;
use crate::state::{Package, Source};
use crate::util::{percent_encode, s, ss};

use super::{PackageCatalog, Result};

/// Base distribution package index.
pub struct DistroCatalog {
    /// API base URL, without a trailing slash.
    pub api_base: String,
    /// Distribution the image targets (e.g. `rhel-9`).
    pub distribution: String,
    /// Target architecture (e.g. `x86_64`).
    pub architecture: String,
}

impl DistroCatalog {
    async fn get(&self, query: &str, limit: Option<usize>) -> Result<Vec<Package>> {
        let mut url = format!(
            "{}/packages?distribution={}&architecture={}&search={}",
            self.api_base,
            percent_encode(&self.distribution),
            percent_encode(&self.architecture),
            percent_encode(query.trim())
        );
        if let Some(n) = limit {
            url.push_str(&format!("&limit={n}"));
        }
        tracing::debug!(url = %url, "distro catalog fetch");
        let v: Value = reqwest::get(&url).await?.error_for_status()?.json().await?;
        let mut items = Vec::new();
        if let Some(arr) = v.get("data").and_then(|x| x.as_array()) {
            for pkg in arr {
                let name = s(pkg, "name");
                if name.is_empty() {
                    continue;
                }
                items.push(Package {
                    name,
                    summary: s(pkg, "summary"),
                    source: Source::Distro,
                });
            }
        }
        Ok(items)
    }
}

impl PackageCatalog for DistroCatalog {
    fn fetch(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> impl Future<Output = Result<Vec<Package>>> + Send {
        self.get(query, limit)
    }
}

/// User-configured third-party content sources.
pub struct ContentSourcesCatalog {
    /// API base URL, without a trailing slash.
    pub api_base: String,
    /// Repository URLs to search across.
    pub repositories: Vec<String>,
}

impl ContentSourcesCatalog {
    async fn post(&self, query: &str, limit: Option<usize>) -> Result<Vec<Package>> {
        let mut body = serde_json::json!({
            "urls": self.repositories,
            "search": query.trim(),
        });
        if let Some(n) = limit {
            body["limit"] = Value::from(n);
        }
        let url = format!("{}/rpms/names", self.api_base);
        tracing::debug!(url = %url, repositories = self.repositories.len(), "content sources fetch");
        let v: Value = reqwest::Client::new()
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let mut items = Vec::new();
        if let Some(arr) = v.as_array() {
            for pkg in arr {
                let Some(name) = ss(pkg, &["package_name", "name"]) else {
                    continue;
                };
                if name.is_empty() {
                    continue;
                }
                items.push(Package {
                    name,
                    summary: s(pkg, "summary"),
                    source: Source::Custom,
                });
            }
        }
        Ok(items)
    }
}

impl PackageCatalog for ContentSourcesCatalog {
    fn fetch(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> impl Future<Output = Result<Vec<Package>>> + Send {
        self.post(query, limit)
    }
}

/// Fetch strategy resolved from the feature flags, fixed for the session.
pub enum CatalogBackend {
    /// Search the base distribution index.
    Distro(DistroCatalog),
    /// Search the configured content sources.
    ContentSources(ContentSourcesCatalog),
}

impl PackageCatalog for CatalogBackend {
    fn fetch(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> impl Future<Output = Result<Vec<Package>>> + Send {
        async move {
            match self {
                Self::Distro(c) => c.fetch(query, limit).await,
                Self::ContentSources(c) => c.fetch(query, limit).await,
            }
        }
    }
}

/// What: Resolve which catalog a wizard session searches.
///
/// Inputs:
/// - `flags`: Evaluated feature flags
/// - `distro`: Base distribution backend
/// - `content_sources`: Content-sources backend
///
/// Output:
/// - The backend the flags select; callers pass it to the worker instead of
///   branching on flag state during searches.
#[must_use]
pub fn select_backend(
    flags: &FeatureFlags,
    distro: DistroCatalog,
    content_sources: ContentSourcesCatalog,
) -> CatalogBackend {
    if flags.content_sources {
        CatalogBackend::ContentSources(content_sources)
    } else {
        CatalogBackend::Distro(distro)
    }
}
