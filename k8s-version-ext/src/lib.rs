use std::future::Future;
use std::sync::Arc;

pub use k8s_openapi as openapi;
pub use k8s_openapi::apimachinery::pkg::version;
pub use k8s_version::GenericVersion;
pub use k8s_version::ParseVersionError;

/// Source of the Kubernetes API server version.
///
/// Implemented by `KubeApi` against a live cluster; anything that can report a version
/// string (a fixed value, a recorded response) can stand in for it.
pub trait ServerVersion {
    type Error;

    /// Returns the server's git version, e.g. `v1.30.2-aliyun.1`.
    fn server_version(&self) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

impl<T> ServerVersion for Arc<T>
where
    T: ServerVersion + Send + Sync,
{
    type Error = T::Error;

    fn server_version(&self) -> impl Future<Output = Result<String, Self::Error>> + Send {
        T::server_version(self)
    }
}

pub trait InfoExt {
    fn with_git_version(git_version: impl ToString) -> Self;
    fn generic_version(&self) -> Result<GenericVersion, ParseVersionError>;
}

impl InfoExt for version::Info {
    fn with_git_version(git_version: impl ToString) -> Self {
        let git_version = git_version.to_string();
        let (major, minor) = match GenericVersion::parse(&git_version) {
            Ok(version) => (version.major().to_string(), version.minor().to_string()),
            Err(_) => default(),
        };
        Self {
            git_version,
            major,
            minor,
            ..default()
        }
    }

    fn generic_version(&self) -> Result<GenericVersion, ParseVersionError> {
        GenericVersion::parse(&self.git_version)
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}

#[cfg(test)]
mod tests;
