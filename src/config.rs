//! Layered service configuration.
//!
//! Values are resolved from, in increasing priority: built-in defaults, an
//! optional TOML file, `TASK_TRACKER_`-prefixed environment variables (with
//! `__` separating nested keys, e.g. `TASK_TRACKER_UPLOAD__MAX_BYTES`), and
//! command-line overrides merged by the binary.

use crate::notification::adapters::DeliveryPolicy;
use crate::upload::domain::{DEFAULT_MAX_UPLOAD_BYTES, UploadPolicy};
use camino::{Utf8Path, Utf8PathBuf};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::net::{Ipv6Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

/// Prefix of environment variables read by [`TrackerConfig::figment`].
pub const ENV_PREFIX: &str = "TASK_TRACKER_";

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed or a value had the wrong type.
    #[error("failed to build config: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// A value was well-typed but out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Socket address the HTTP server binds to.
    pub listen_address: SocketAddr,
    /// Directory holding the JSON snapshots; in-memory storage when absent.
    pub data_dir: Option<Utf8PathBuf>,
    /// Image upload settings.
    pub upload: UploadConfig,
    /// Notification delivery settings.
    pub notification: NotificationConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            listen_address: SocketAddr::from((Ipv6Addr::LOCALHOST, 8080)),
            data_dir: None,
            upload: UploadConfig::default(),
            notification: NotificationConfig::default(),
        }
    }
}

/// Image upload settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Directory receiving uploaded files; in-memory storage when absent.
    pub dir: Option<Utf8PathBuf>,
    /// URL prefix under which uploaded files are served.
    pub public_prefix: String,
    /// Largest accepted upload in bytes.
    pub max_bytes: usize,
    /// Time allowed for the store to accept an upload, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: None,
            public_prefix: "/uploaded".to_owned(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            timeout_ms: 10_000,
        }
    }
}

impl UploadConfig {
    /// Returns the acceptance policy.
    #[must_use]
    pub const fn policy(&self) -> UploadPolicy {
        UploadPolicy::new(self.max_bytes)
    }

    /// Returns the store timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Notification delivery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Address receiving operator notifications.
    pub operator_email: String,
    /// Capacity of the delivery queue.
    pub queue_capacity: usize,
    /// Time allowed for one delivery attempt, in milliseconds.
    pub timeout_ms: u64,
    /// Attempts per event before it is dropped.
    pub max_attempts: u32,
    /// Delay before the first retry, in milliseconds; doubled per retry.
    pub initial_backoff_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        let policy = DeliveryPolicy::default();
        Self {
            operator_email: "operator@localhost".to_owned(),
            queue_capacity: policy.capacity(),
            timeout_ms: duration_ms(policy.attempt_timeout()),
            max_attempts: policy.max_attempts(),
            initial_backoff_ms: duration_ms(policy.initial_backoff()),
        }
    }
}

impl NotificationConfig {
    /// Returns the delivery policy.
    #[must_use]
    pub fn policy(&self) -> DeliveryPolicy {
        DeliveryPolicy::new(
            self.queue_capacity,
            Duration::from_millis(self.timeout_ms),
            self.max_attempts,
            Duration::from_millis(self.initial_backoff_ms),
        )
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl TrackerConfig {
    /// Returns the provider stack: defaults, the TOML file when given, then
    /// the environment.
    #[must_use]
    pub fn figment(config_file: Option<&Utf8Path>) -> Figment {
        let figment = Figment::from(Serialized::defaults(Self::default()));
        let figment = match config_file {
            Some(path) => figment.merge(Toml::file(path.as_std_path())),
            None => figment,
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when extraction fails, or
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.upload.max_bytes == 0 {
            return Err(ConfigError::Invalid(
                "upload.max_bytes must be positive".to_owned(),
            ));
        }
        if self.upload.timeout_ms == 0 || self.notification.timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeouts must be positive".to_owned()));
        }
        if self.notification.queue_capacity == 0 || self.notification.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "notification.queue_capacity and notification.max_attempts must be positive"
                    .to_owned(),
            ));
        }
        if self.notification.operator_email.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "notification.operator_email must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn from_toml(contents: &str) -> Result<TrackerConfig, ConfigError> {
        let figment =
            Figment::from(Serialized::defaults(TrackerConfig::default())).merge(Toml::string(contents));
        TrackerConfig::from_figment(&figment)
    }

    #[rstest]
    fn defaults_are_valid() {
        let config = from_toml("").expect("defaults");
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.listen_address.port(), 8080);
        assert_eq!(config.upload.policy(), UploadPolicy::default());
        assert_eq!(config.notification.policy(), DeliveryPolicy::default());
    }

    #[rstest]
    fn toml_overrides_nested_sections() {
        let config = from_toml(
            r#"
            listen_address = "127.0.0.1:9000"
            data_dir = "/var/lib/task-tracker"

            [upload]
            max_bytes = 1024
            public_prefix = "/files"

            [notification]
            max_attempts = 5
            "#,
        )
        .expect("valid config");

        assert_eq!(config.listen_address.port(), 9000);
        assert_eq!(
            config.data_dir.as_deref(),
            Some(Utf8Path::new("/var/lib/task-tracker"))
        );
        assert_eq!(config.upload.max_bytes, 1024);
        assert_eq!(config.upload.public_prefix, "/files");
        assert_eq!(config.upload.timeout_ms, UploadConfig::default().timeout_ms);
        assert_eq!(config.notification.max_attempts, 5);
    }

    #[rstest]
    #[case("[upload]\nmax_bytes = 0")]
    #[case("[notification]\nqueue_capacity = 0")]
    #[case("[notification]\ntimeout_ms = 0")]
    #[case("[notification]\noperator_email = \"  \"")]
    fn out_of_range_values_are_rejected(#[case] contents: &str) {
        assert!(matches!(from_toml(contents), Err(ConfigError::Invalid(_))));
    }

    #[rstest]
    fn wrong_types_are_rejected() {
        assert!(matches!(
            from_toml("listen_address = 42"),
            Err(ConfigError::Figment(_))
        ));
    }
}
