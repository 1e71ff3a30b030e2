use std::time::Duration;

use figment::{Figment, providers::Env};
use serde::Deserialize;

/// Harness configuration, read from `STRATUS_*` environment variables.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Emulator edge endpoint used when no container is started.
    pub endpoint: String,

    pub region: String,

    /// Account id the emulator is expected to stamp into URLs and ARNs.
    pub account_id: String,

    pub access_key_id: String,

    pub secret_access_key: String,

    /// Binary CBOR wire encoding. Only the JSON text format is supported.
    pub cbor_enabled: bool,

    /// Start a LocalStack container instead of using `endpoint`.
    pub start_container: bool,

    /// Fall back to `endpoint` when the container cannot be started.
    pub ignore_docker_run_errors: bool,

    pub localstack_tag: String,

    /// How long a container start may take before it counts as failed.
    pub localstack_startup_timeout_ms: u64,

    /// Upper bound for eventually consistent reads.
    pub wait_window_ms: u64,

    pub wait_initial_delay_ms: u64,

    pub wait_max_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: types::DEFAULT_ENDPOINT.to_string(),
            region: types::DEFAULT_REGION.to_string(),
            account_id: types::DEFAULT_AWS_ACCOUNT_ID.to_string(),
            access_key_id: "test".to_string(),
            secret_access_key: "test".to_string(),
            cbor_enabled: false,
            start_container: false,
            ignore_docker_run_errors: true,
            localstack_tag: "3.8".to_string(),
            localstack_startup_timeout_ms: 120_000,
            wait_window_ms: 2_000,
            wait_initial_delay_ms: 100,
            wait_max_delay_ms: 1_000,
        }
    }
}

impl Config {
    #[must_use]
    pub const fn localstack_startup_timeout(&self) -> Duration {
        Duration::from_millis(self.localstack_startup_timeout_ms)
    }

    #[must_use]
    pub const fn wait_window(&self) -> Duration {
        Duration::from_millis(self.wait_window_ms)
    }

    #[must_use]
    pub const fn wait_initial_delay(&self) -> Duration {
        Duration::from_millis(self.wait_initial_delay_ms)
    }

    #[must_use]
    pub const fn wait_max_delay(&self) -> Duration {
        Duration::from_millis(self.wait_max_delay_ms)
    }

    /// Check the settings that extraction alone cannot reject.
    ///
    /// # Errors
    /// If CBOR encoding is requested, the endpoint is not an http(s) URL, or
    /// a duration is out of range.
    pub fn validate(&self) -> Result<(), figment::Error> {
        if self.cbor_enabled {
            return Err(
                "cbor_enabled is not supported: clients use the JSON wire format"
                    .into(),
            );
        }

        if !(self.endpoint.starts_with("http://")
            || self.endpoint.starts_with("https://"))
        {
            return Err(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )
            .into());
        }

        if self.wait_window_ms == 0 {
            return Err("wait_window_ms must be greater than zero".into());
        }

        if self.wait_initial_delay_ms == 0 {
            return Err(
                "wait_initial_delay_ms must be greater than zero".into()
            );
        }

        if self.wait_max_delay_ms < self.wait_initial_delay_ms {
            return Err(format!(
                "wait_max_delay_ms ({}) must not be below \
                 wait_initial_delay_ms ({})",
                self.wait_max_delay_ms, self.wait_initial_delay_ms
            )
            .into());
        }

        if self.localstack_startup_timeout_ms == 0 {
            return Err(
                "localstack_startup_timeout_ms must be greater than zero".into()
            );
        }

        Ok(())
    }
}

/// Extract and validate the configuration from the environment.
///
/// # Errors
/// If a variable cannot be parsed into its field or validation fails.
pub fn load_config() -> Result<Config, figment::Error> {
    let figment = Figment::new().merge(Env::prefixed("STRATUS_"));

    let config: Config = figment.extract()?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_env() {
        Jail::expect_with(|_jail| {
            let config = load_config()?;
            assert_eq!(config, Config::default());
            assert_eq!(config.endpoint, "http://localhost:4566");
            assert_eq!(config.account_id, "000000000000");
            assert_eq!(config.wait_window(), Duration::from_secs(2));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("STRATUS_ENDPOINT", "http://emulator:4566");
            jail.set_env("STRATUS_REGION", "eu-west-1");
            jail.set_env("STRATUS_START_CONTAINER", "true");
            jail.set_env("STRATUS_WAIT_WINDOW_MS", "5000");

            let config = load_config()?;
            assert_eq!(config.endpoint, "http://emulator:4566");
            assert_eq!(config.region, "eu-west-1");
            assert!(config.start_container);
            assert_eq!(config.wait_window(), Duration::from_secs(5));
            assert_eq!(config.wait_initial_delay(), Duration::from_millis(100));
            Ok(())
        });
    }

    #[test]
    fn test_cbor_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("STRATUS_CBOR_ENABLED", "true");
            assert!(load_config().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = Config {
            endpoint: "localhost:4566".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_window() {
        let config = Config {
            wait_window_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_initial_delay() {
        let config = Config {
            wait_initial_delay_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_max_delay_below_initial() {
        let config = Config {
            wait_initial_delay_ms: 500,
            wait_max_delay_ms: 200,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let equal = Config {
            wait_initial_delay_ms: 200,
            wait_max_delay_ms: 200,
            ..Config::default()
        };
        assert!(equal.validate().is_ok());
    }

    #[test]
    fn test_zero_initial_delay_from_env_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("STRATUS_WAIT_INITIAL_DELAY_MS", "0");
            assert!(load_config().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_startup_timeout_override() {
        Jail::expect_with(|jail| {
            jail.set_env("STRATUS_LOCALSTACK_STARTUP_TIMEOUT_MS", "30000");

            let config = load_config()?;
            assert_eq!(
                config.localstack_startup_timeout(),
                Duration::from_secs(30)
            );
            Ok(())
        });
    }
}
