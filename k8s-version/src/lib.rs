use constcat::concat;

pub use generic::GenericVersion;
pub use generic::ParseVersionError;
pub use range::SupportedRange;
pub use range::VersionError;

/// Lowest Kubernetes version the workload is tested against.
pub const MIN_K8S_VERSION: &str = "1.28.1";
/// Highest Kubernetes version the workload is tested against.
pub const MAX_K8S_VERSION: &str = "1.33.3";
pub const SUPPORTED_RANGE: &str = concat!("[", MIN_K8S_VERSION, ", ", MAX_K8S_VERSION, "]");

mod generic;
mod range;

/// Checks `version` against the default supported range
/// `[MIN_K8S_VERSION, MAX_K8S_VERSION]`, both bounds inclusive.
///
/// Returns the parsed version when it is supported.
///
/// # Examples
///
/// ```
/// assert!(k8s_version::validate_k8s_version("v1.30.2-aliyun.1").is_ok());
/// assert!(k8s_version::validate_k8s_version("1.34.0").is_err());
/// ```
pub fn validate_k8s_version(version: &str) -> Result<GenericVersion, VersionError> {
    SupportedRange::default().validate(version)
}
