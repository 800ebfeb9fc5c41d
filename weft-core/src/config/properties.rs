use std::path::Path;

use serde::Deserialize;
use weft_common::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Properties {
    /// Lease placed on a task when it is handed to a poller. An unacknowledged task becomes
    /// visible again once it runs out.
    pub task_lock_duration_ms: u64,
    /// Maximum number of read-mutate-save rounds a single history mutation gets before giving
    /// up with `MaxAttemptsExceeded`.
    pub conditional_retry_count: u32,
    /// How many empty polls a long poll performs before answering with no task.
    pub long_poll_max_attempts: u32,
    /// Pause between two empty polls of a long poll.
    pub long_poll_grace_period_ms: u64,
}

impl Properties {
    const ENV_PREFIX: &'static str = "WEFT_";
    /// Longest accepted task lease, one day.
    pub const MAX_TASK_LOCK_DURATION_MS: u64 = 24 * 60 * 60 * 1000;

    pub fn task_lock_duration(&self) -> Duration {
        Duration::from_millis(self.task_lock_duration_ms)
    }

    pub fn long_poll_grace_period(&self) -> Duration {
        Duration::from_millis(self.long_poll_grace_period_ms)
    }

    pub fn from_toml_str(content: &str) -> TegResult<Self> {
        let properties: Properties = toml::from_str(content)
            .map_err(|e| ErrorCode::IllegalArgument(format!("invalid properties: {}", e)))?;
        properties.validate()?;
        Ok(properties)
    }

    pub fn from_file(path: impl AsRef<Path>) -> TegResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Overrides fields from `WEFT_<FIELD NAME IN UPPER CASE>` environment variables.
    pub fn with_env_overrides(mut self) -> TegResult<Self> {
        if let Some(v) = Self::env_var("TASK_LOCK_DURATION_MS") {
            self.task_lock_duration_ms = v.parse()?;
        }
        if let Some(v) = Self::env_var("CONDITIONAL_RETRY_COUNT") {
            self.conditional_retry_count = v.parse()?;
        }
        if let Some(v) = Self::env_var("LONG_POLL_MAX_ATTEMPTS") {
            self.long_poll_max_attempts = v.parse()?;
        }
        if let Some(v) = Self::env_var("LONG_POLL_GRACE_PERIOD_MS") {
            self.long_poll_grace_period_ms = v.parse()?;
        }
        self.validate()?;
        Ok(self)
    }

    fn env_var(name: &str) -> Option<String> {
        std::env::var(format!("{}{}", Self::ENV_PREFIX, name)).ok()
    }

    fn validate(&self) -> TegResult<()> {
        if self.task_lock_duration_ms > Self::MAX_TASK_LOCK_DURATION_MS {
            fmt_err!(
                IllegalArgument,
                "task_lock_duration_ms must be at most {}, got {}",
                Self::MAX_TASK_LOCK_DURATION_MS,
                self.task_lock_duration_ms
            )
        } else if self.conditional_retry_count == 0 {
            str_err!(IllegalArgument, "conditional_retry_count must be at least 1")
        } else if self.long_poll_max_attempts == 0 {
            str_err!(IllegalArgument, "long_poll_max_attempts must be at least 1")
        } else {
            Ok(())
        }
    }
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            task_lock_duration_ms: 10 * 1000,
            conditional_retry_count: 5,
            long_poll_max_attempts: 10,
            long_poll_grace_period_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let properties = Properties::from_toml_str("conditional_retry_count = 3").expect("parse");
        assert_eq!(properties.conditional_retry_count, 3);
        assert_eq!(properties.task_lock_duration(), Duration::from_secs(10));
        assert_eq!(properties.long_poll_grace_period(), Duration::from_millis(100));
    }

    #[test]
    fn zero_retry_count_is_rejected() {
        let err = Properties::from_toml_str("conditional_retry_count = 0").unwrap_err();
        assert!(err.is_illegal_argument());
    }

    #[test]
    fn oversized_lock_duration_is_rejected() {
        let content = format!("task_lock_duration_ms = {}", i64::MAX);
        let err = Properties::from_toml_str(&content).unwrap_err();
        assert!(err.is_illegal_argument());

        let content = format!(
            "task_lock_duration_ms = {}",
            Properties::MAX_TASK_LOCK_DURATION_MS
        );
        let properties = Properties::from_toml_str(&content).expect("parse");
        assert_eq!(
            properties.task_lock_duration(),
            Duration::from_secs(24 * 60 * 60)
        );
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = Properties::from_toml_str("conditional_retry_count = \"many\"").unwrap_err();
        assert!(err.is_illegal_argument());
    }
}
