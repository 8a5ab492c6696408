use std::fmt;

use super::GenericVersion;
use super::MAX_K8S_VERSION;
use super::MIN_K8S_VERSION;
use super::ParseVersionError;

/// Inclusive range of Kubernetes versions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportedRange {
    min: GenericVersion,
    max: GenericVersion,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error(transparent)]
    Parse(#[from] ParseVersionError),
    #[error("kubernetes version {version} is not within the supported range {range}")]
    Unsupported {
        version: GenericVersion,
        range: SupportedRange,
    },
}

impl SupportedRange {
    /// Creates a range from `min` to `max`, both inclusive.
    ///
    /// `min` is expected to be less than or equal to `max`; an inverted range
    /// contains nothing.
    pub fn new(min: GenericVersion, max: GenericVersion) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> &GenericVersion {
        &self.min
    }

    pub fn max(&self) -> &GenericVersion {
        &self.max
    }

    pub fn contains(&self, version: &GenericVersion) -> bool {
        self.min <= *version && *version <= self.max
    }

    /// Parses `version` and checks it against the range.
    ///
    /// # Errors
    ///
    /// `VersionError::Parse` if `version` is not a generic version,
    /// `VersionError::Unsupported` if it falls outside the range.
    pub fn validate(&self, version: &str) -> Result<GenericVersion, VersionError> {
        let version = GenericVersion::parse(version)?;
        if self.contains(&version) {
            Ok(version)
        } else {
            let range = self.clone();
            Err(VersionError::Unsupported { version, range })
        }
    }
}

impl Default for SupportedRange {
    /// `[MIN_K8S_VERSION, MAX_K8S_VERSION]`
    fn default() -> Self {
        let [major, minor, patch] = DEFAULT_MIN;
        let min = GenericVersion::new(major, minor, patch);
        let [major, minor, patch] = DEFAULT_MAX;
        let max = GenericVersion::new(major, minor, patch);
        Self::new(min, max)
    }
}

const DEFAULT_MIN: [u64; 3] = release_triple(MIN_K8S_VERSION);
const DEFAULT_MAX: [u64; 3] = release_triple(MAX_K8S_VERSION);

/// Splits a plain `major.minor.patch` constant at compile time.
const fn release_triple(version: &str) -> [u64; 3] {
    let bytes = version.as_bytes();
    let mut triple = [0; 3];
    let mut index = 0;
    let mut digits = 0;
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if byte == b'.' {
            assert!(digits > 0 && index < 2, "expected major.minor.patch");
            index += 1;
            digits = 0;
        } else {
            assert!(byte.is_ascii_digit(), "expected major.minor.patch");
            triple[index] = triple[index] * 10 + (byte - b'0') as u64;
            digits += 1;
        }
        i += 1;
    }
    assert!(digits > 0 && index == 2, "expected major.minor.patch");
    triple
}

impl fmt::Display for SupportedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
