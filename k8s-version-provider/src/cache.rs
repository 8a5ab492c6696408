use std::time::Duration;

use moka::future::Cache;

/// Shared cache holding the discovered version.
///
/// Cloning is cheap and clones share the same entries, so the cache can be owned
/// outside the provider and inspected or pre-populated by the caller.
pub type VersionCache = Cache<String, String>;

/// Builds a [`VersionCache`] whose entries expire `default_ttl` after insertion.
pub fn version_cache(default_ttl: Duration) -> VersionCache {
    Cache::builder().time_to_live(default_ttl).build()
}
