use std::time::Duration;

use time::ext::NumericalStdDuration as _;

pub(crate) const POLL_INTERVAL_VAR: &str = "K8S_VERSION_POLL_INTERVAL";
pub(crate) const CACHE_TTL_VAR: &str = "K8S_VERSION_CACHE_TTL";

/// Durations use Go syntax, e.g. `90s`, `1m30s`, `1h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) poll_interval: Duration,
    pub(crate) cache_ttl: Duration,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("{var}: invalid duration {value:?}: {reason}")]
    InvalidDuration {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("{var}: duration must be positive, got {value:?}")]
    NotPositive { var: &'static str, value: String },
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let poll_interval = duration(&lookup, POLL_INTERVAL_VAR)?.unwrap_or(defaults.poll_interval);
        let cache_ttl = duration(&lookup, CACHE_TTL_VAR)?.unwrap_or(defaults.cache_ttl);
        Ok(Self {
            poll_interval,
            cache_ttl,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval: 1.std_minutes(),
            cache_ttl: 15.std_minutes(),
        }
    }
}

fn duration(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<Duration>, ConfigError> {
    let Some(value) = lookup(var).filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };

    let nanos = go_parse_duration::parse_duration(value.trim()).map_err(|err| {
        ConfigError::InvalidDuration {
            var,
            value: value.clone(),
            reason: format!("{err:?}"),
        }
    })?;

    match u64::try_from(nanos) {
        Ok(nanos) if nanos > 0 => Ok(Some(Duration::from_nanos(nanos))),
        _ => Err(ConfigError::NotPositive { var, value }),
    }
}
