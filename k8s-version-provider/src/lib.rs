use std::time::Duration;

use k8s_version::SupportedRange;
use k8s_version::VersionError;
use k8s_version_ext as k8s;

pub use cache::version_cache;
pub use cache::VersionCache;
pub use monitor::ChangeMonitor;

pub const KUBERNETES_VERSION_CACHE_KEY: &str = "kubernetesVersion";
pub const KUBERNETES_VERSION_CHANNEL: &str = "kubernetes-version";

mod cache;
mod monitor;

/// Provides the Kubernetes API server version.
///
/// Built once at startup around an API client and a shared cache. The version is
/// cached to reduce the number of calls made to the API server. Every time a new
/// version is seen it is logged and checked against the supported range; a version
/// outside the range is logged as an error but still returned.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use std::future::Future;
/// use std::time::Duration;
///
/// use k8s_version_ext::ServerVersion;
/// use k8s_version_provider::{version_cache, VersionProvider};
///
/// struct Fixed;
///
/// impl ServerVersion for Fixed {
///     type Error = Infallible;
///
///     fn server_version(&self) -> impl Future<Output = Result<String, Infallible>> + Send {
///         std::future::ready(Ok("v1.30.2".to_string()))
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let cache = version_cache(Duration::from_secs(900));
/// let provider = VersionProvider::new(Fixed, cache);
/// assert_eq!(provider.get().await, Ok("v1.30.2".to_string()));
/// # }
/// ```
#[derive(Debug)]
pub struct VersionProvider<S> {
    source: S,
    cache: VersionCache,
    monitor: ChangeMonitor,
    range: SupportedRange,
}

/// A version returned by [`VersionProvider::discover`] along with what was done with it.
#[derive(Debug)]
pub struct Discovered {
    pub version: String,
    pub outcome: Outcome,
}

#[derive(Debug)]
pub enum Outcome {
    /// Served from the cache, the server was not asked.
    Cached,
    /// Fetched from the server, same as the last version seen.
    Unchanged,
    /// New version, within the supported range.
    Supported,
    /// New version that failed validation. Advisory only.
    Unsupported(VersionError),
}

impl Outcome {
    pub fn advisory(&self) -> Option<&VersionError> {
        match self {
            Self::Unsupported(err) => Some(err),
            Self::Cached | Self::Unchanged | Self::Supported => None,
        }
    }
}

impl<S> VersionProvider<S>
where
    S: k8s::ServerVersion,
{
    pub fn new(source: S, cache: VersionCache) -> Self {
        Self {
            source,
            cache,
            monitor: ChangeMonitor::new(),
            range: SupportedRange::default(),
        }
    }

    /// Validate against `range` instead of `[MIN_K8S_VERSION, MAX_K8S_VERSION]`.
    pub fn with_range(self, range: SupportedRange) -> Self {
        Self { range, ..self }
    }

    /// Revalidate an unchanged version once `expiry` has passed since it was last
    /// reported, instead of every 24 hours.
    pub fn with_change_expiry(self, expiry: Duration) -> Self {
        let monitor = ChangeMonitor::with_expiry(expiry);
        Self { monitor, ..self }
    }

    pub fn range(&self) -> &SupportedRange {
        &self.range
    }

    /// Returns the API server version.
    ///
    /// # Errors
    ///
    /// The source's error, unchanged, when the version could not be fetched. Nothing
    /// is cached in that case.
    pub async fn get(&self) -> Result<String, S::Error> {
        self.discover().await.map(|discovered| discovered.version)
    }

    /// Like [`get`](Self::get), also reporting whether the version came from the
    /// cache and how validation went.
    pub async fn discover(&self) -> Result<Discovered, S::Error> {
        let cached = self.cache.get(KUBERNETES_VERSION_CACHE_KEY).await;
        if let Some(version) = cached {
            let outcome = Outcome::Cached;
            return Ok(Discovered { version, outcome });
        }

        let version = self.source.server_version().await?;
        self.cache
            .insert(KUBERNETES_VERSION_CACHE_KEY.to_string(), version.clone())
            .await;

        let outcome = if self
            .monitor
            .has_changed(KUBERNETES_VERSION_CHANNEL, version.as_str())
            .await
        {
            tracing::debug!(version, "discovered kubernetes version");
            self.validate(&version)
        } else {
            Outcome::Unchanged
        };

        Ok(Discovered { version, outcome })
    }

    fn validate(&self, version: &str) -> Outcome {
        self.range
            .validate(version)
            .inspect_err(|err| tracing::error!(%err, "failed validating kubernetes version"))
            .map_or_else(Outcome::Unsupported, |_| Outcome::Supported)
    }
}
