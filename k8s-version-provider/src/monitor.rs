use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use moka::future::Cache;
use time::ext::NumericalStdDuration as _;

fn hash<T: Hash + ?Sized>(t: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    t.hash(&mut hasher);
    hasher.finish()
}

/// Remembers the last value seen on each named channel.
///
/// Used to do work (logging, validation) once per distinct value instead of once per
/// call. A record older than the expiry counts as changed, so a value that stays
/// the same is still reported again periodically.
#[derive(Debug)]
pub struct ChangeMonitor {
    seen: Cache<String, u64>,
}

impl ChangeMonitor {
    /// A monitor whose records expire after 24 hours.
    pub fn new() -> Self {
        Self::with_expiry(24.std_hours())
    }

    pub fn with_expiry(expiry: Duration) -> Self {
        let seen = Cache::builder().time_to_live(expiry).build();
        Self { seen }
    }

    /// Returns true if `value` differs from the last value recorded for `channel`,
    /// recording it if so.
    pub async fn has_changed<T: Hash + ?Sized>(&self, channel: &str, value: &T) -> bool {
        let hash = hash(value);
        let changed = self.seen.get(channel).await != Some(hash);
        if changed {
            self.seen.insert(channel.to_string(), hash).await;
        }
        changed
    }
}

impl Default for ChangeMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_first_and_distinct_values() {
        let monitor = ChangeMonitor::new();
        assert!(monitor.has_changed("version", "1.30.0").await);
        assert!(!monitor.has_changed("version", "1.30.0").await);
        assert!(monitor.has_changed("version", "1.31.0").await);
        assert!(monitor.has_changed("version", "1.30.0").await);
    }

    #[tokio::test]
    async fn channels_are_independent() {
        let monitor = ChangeMonitor::new();
        assert!(monitor.has_changed("a", &1).await);
        assert!(monitor.has_changed("b", &1).await);
        assert!(!monitor.has_changed("a", &1).await);
        assert!(!monitor.has_changed("b", &1).await);
    }

    #[tokio::test]
    async fn records_expire() {
        let monitor = ChangeMonitor::with_expiry(50.std_milliseconds());
        assert!(monitor.has_changed("version", "1.30.0").await);
        assert!(!monitor.has_changed("version", "1.30.0").await);

        tokio::time::sleep(120.std_milliseconds()).await;
        assert!(monitor.has_changed("version", "1.30.0").await);
        assert!(!monitor.has_changed("version", "1.30.0").await);
    }
}
