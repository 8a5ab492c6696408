use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A dotted numeric version, compared component by component.
///
/// Parsing follows the Kubernetes "generic" version rules: leading whitespace and an
/// optional `v` are skipped, then at least two dot separated decimal components are
/// read. Whatever follows the numeric prefix (pre-release tags, build metadata, vendor
/// suffixes such as `-aliyun.1`) is ignored. The major component must not carry a
/// leading zero; later components may. Missing trailing components compare as
/// zero, so `1.28` and `1.28.0` are equal.
///
/// ```
/// use k8s_version::GenericVersion;
///
/// let version: GenericVersion = "v1.30.2-aliyun.1".parse()?;
/// assert_eq!(version.to_string(), "1.30.2");
/// assert!(version < "1.31".parse()?);
/// # Ok::<(), k8s_version::ParseVersionError>(())
/// ```
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GenericVersion {
    components: Vec<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseVersionError {
    #[error("empty version string")]
    Empty,
    #[error("could not parse {0:?} as a version")]
    Malformed(String),
    #[error("version {0:?} has fewer than two components")]
    TooFewComponents(String),
    #[error("version {version:?} has a zero-prefixed major component {component:?}")]
    ZeroPrefixed { version: String, component: String },
    #[error("version {version:?} has an invalid component {component:?}")]
    InvalidComponent { version: String, component: String },
}

impl GenericVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        let components = vec![major, minor, patch];
        Self { components }
    }

    pub fn parse(text: &str) -> Result<Self, ParseVersionError> {
        let trimmed = text.trim_start();
        if trimmed.is_empty() {
            return Err(ParseVersionError::Empty);
        }

        let unprefixed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let end = unprefixed
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(unprefixed.len());
        let (numeric, _rest) = unprefixed.split_at(end);

        // "1..2" stops at the first empty component, same as a trailing dot
        let parts = numeric
            .split('.')
            .take_while(|component| !component.is_empty())
            .collect::<Vec<_>>();

        match parts.as_slice() {
            [] => return Err(ParseVersionError::Malformed(text.to_string())),
            [_] => return Err(ParseVersionError::TooFewComponents(text.to_string())),
            [major, ..] if major.len() > 1 && major.starts_with('0') => {
                return Err(ParseVersionError::ZeroPrefixed {
                    version: text.to_string(),
                    component: major.to_string(),
                });
            }
            _ => {}
        }

        let components = parts
            .into_iter()
            .map(|component| {
                component
                    .parse::<u64>()
                    .map_err(|_| ParseVersionError::InvalidComponent {
                        version: text.to_string(),
                        component: component.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    pub fn major(&self) -> u64 {
        self.component(0)
    }

    pub fn minor(&self) -> u64 {
        self.component(1)
    }

    pub fn patch(&self) -> u64 {
        self.component(2)
    }

    fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or_default()
    }
}

impl PartialEq for GenericVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl PartialOrd for GenericVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GenericVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|index| self.component(index).cmp(&other.component(index)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for GenericVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.components.iter();
        if let Some(first) = components.next() {
            write!(f, "{first}")?;
        }
        for component in components {
            write!(f, ".{component}")?;
        }
        Ok(())
    }
}

impl FromStr for GenericVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GenericVersion {
    type Error = ParseVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<GenericVersion> for String {
    fn from(version: GenericVersion) -> Self {
        version.to_string()
    }
}
