//! Feed configuration parsed from environment variables.

pub const DEFAULT_FEED_CAPACITY: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid NAMEPLATE_FEED_CAPACITY: {0} (expected a positive integer)")]
    InvalidCapacity(String),
    #[error("invalid NAMEPLATE_LAG_POLICY: {0} (expected `error` or `skip`)")]
    InvalidLagPolicy(String),
}

/// What a subscriber does when it falls behind the broadcast buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LagPolicy {
    /// Forward `FeedError::Lagged` and end the subscription.
    #[default]
    Error,
    /// Log the gap and continue with the oldest value still buffered.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameplateConfig {
    /// Per-channel broadcast buffer size.
    pub feed_capacity: usize,
    pub lag_policy: LagPolicy,
}

impl Default for NameplateConfig {
    fn default() -> Self {
        Self { feed_capacity: DEFAULT_FEED_CAPACITY, lag_policy: LagPolicy::Error }
    }
}

impl NameplateConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `NAMEPLATE_FEED_CAPACITY`: default 64, must be greater than zero
    /// - `NAMEPLATE_LAG_POLICY`: `error` (default) or `skip`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let feed_capacity = parse_capacity(std::env::var("NAMEPLATE_FEED_CAPACITY").ok().as_deref())?;
        let lag_policy = parse_lag_policy(std::env::var("NAMEPLATE_LAG_POLICY").ok().as_deref())?;
        Ok(Self { feed_capacity, lag_policy })
    }
}

fn parse_capacity(raw: Option<&str>) -> Result<usize, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_FEED_CAPACITY);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidCapacity(raw.to_owned())),
    }
}

fn parse_lag_policy(raw: Option<&str>) -> Result<LagPolicy, ConfigError> {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("error") => Ok(LagPolicy::Error),
        Some("skip") => Ok(LagPolicy::Skip),
        Some(other) => Err(ConfigError::InvalidLagPolicy(other.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
