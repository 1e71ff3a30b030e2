//! Checks for AWS SDK clients running against a local cloud emulator.
//!
//! A [`Harness`] resolves the emulator, points one client per service at it
//! and carries the bounds used for eventually consistent reads. The
//! [`services`] modules wrap the requests each check makes, and the
//! integration tests under `tests/` assert on their results.

pub mod cleanup;
pub mod emulator;
pub mod error;
pub mod services;
pub mod wait;

use st_app::{ClientFactory, Config, ContextProvider};

pub use cleanup::best_effort;
pub use emulator::Emulator;
pub use error::{Error, Result};
pub use wait::{WaitPolicy, wait_until};

/// Everything a check needs: configuration, emulator and clients.
#[derive(Debug)]
pub struct Harness {
    config: Config,
    emulator: Emulator,
    clients: ClientFactory,
    wait: WaitPolicy,
}

impl ContextProvider for Harness {
    type Error = Error;

    async fn new(config: Config) -> Result<Self> {
        let emulator = Emulator::start(&config).await?;
        let sdk_config =
            st_app::load_sdk_config(&config, emulator.endpoint()).await;
        let wait = WaitPolicy::from(&config);

        Ok(Self {
            config,
            emulator,
            clients: ClientFactory::new(sdk_config),
            wait,
        })
    }
}

impl Harness {
    /// Build a harness from `STRATUS_*` environment variables.
    ///
    /// # Errors
    ///
    /// If the configuration is invalid or the emulator cannot be started.
    pub async fn from_env() -> Result<Self> {
        st_app::create_app_context::<Self>().await
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn emulator(&self) -> &Emulator {
        &self.emulator
    }

    #[must_use]
    pub const fn clients(&self) -> &ClientFactory {
        &self.clients
    }

    #[must_use]
    pub const fn wait_policy(&self) -> &WaitPolicy {
        &self.wait
    }

    /// Account id expected in queue URLs and ARNs.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.config.account_id
    }

    /// Whether the emulator answers requests at all.
    pub async fn is_available(&self) -> bool {
        match self.clients.s3().list_buckets().send().await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(
                    endpoint = self.emulator.endpoint(),
                    "emulator is not answering: {}",
                    aws_sdk_s3::error::DisplayErrorContext(&e)
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_harness_uses_configured_endpoint() {
        let config = Config {
            endpoint: "http://127.0.0.1:4566".to_string(),
            account_id: "123456789012".to_string(),
            ..Config::default()
        };
        let harness = <Harness as ContextProvider>::new(config)
            .await
            .expect("harness");

        assert_eq!(harness.emulator().endpoint(), "http://127.0.0.1:4566");
        assert_eq!(
            harness.clients().sdk_config().endpoint_url(),
            Some("http://127.0.0.1:4566")
        );
        assert_eq!(harness.account_id(), "123456789012");
        assert_eq!(harness.wait_policy(), &WaitPolicy::default());
    }
}
