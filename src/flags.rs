//! Feature-flag evaluation.
//!
//! The engine cares about a single flag: whether package search goes through
//! the content-sources index instead of the base distribution index. The flag
//! is evaluated once and the resolved backend is handed to the worker, so no
//! flag checks are scattered through the search path.

/// Evaluated feature flags for a wizard session.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeatureFlags {
    /// Search user-configured content sources instead of the distribution
    /// index.
    pub content_sources: bool,
}

impl FeatureFlags {
    /// Evaluate flags from the environment (`PKGWIZ_CONTENT_SOURCES`).
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            content_sources: std::env::var("PKGWIZ_CONTENT_SOURCES")
                .is_ok_and(|v| truthy(&v)),
        }
    }
}

/// Lenient boolean parsing for flag values.
fn truthy(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
