use std::fmt;
use std::time::Duration;

use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::localstack::LocalStack;

use crate::error::{Error, Result};

/// LocalStack edge port inside the container.
const EDGE_PORT: u16 = 4566;

/// Services the container is asked to start.
pub const SERVICES: &str =
    "sqs,kinesis,dynamodb,s3,sns,ssm,secretsmanager,cloudwatch,lambda,iam";

/// The emulator the checks talk to.
///
/// Either an instance that was already running, or a LocalStack container
/// owned by this value and removed when it is dropped.
pub struct Emulator {
    endpoint: String,
    container: Option<ContainerAsync<LocalStack>>,
}

impl fmt::Debug for Emulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emulator")
            .field("endpoint", &self.endpoint)
            .field(
                "container",
                &self.container.as_ref().map(ContainerAsync::id),
            )
            .finish()
    }
}

impl Emulator {
    /// Use an emulator that is already listening on `endpoint`.
    #[must_use]
    pub fn external(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            container: None,
        }
    }

    /// Resolve the emulator described by the configuration.
    ///
    /// When a container is requested but cannot be started within
    /// `localstack_startup_timeout_ms`, the configured endpoint is used
    /// instead if `ignore_docker_run_errors` is set.
    ///
    /// # Errors
    ///
    /// [`Error::Emulator`] if the container fails to start and errors are not
    /// ignored.
    pub async fn start(config: &st_app::Config) -> Result<Self> {
        if !config.start_container {
            tracing::info!(
                endpoint = %config.endpoint,
                "using running emulator"
            );
            return Ok(Self::external(&config.endpoint));
        }

        let started = Self::start_container(
            &config.localstack_tag,
            config.localstack_startup_timeout(),
        )
        .await;

        match started {
            Ok(emulator) => Ok(emulator),
            Err(e) if config.ignore_docker_run_errors => {
                tracing::warn!(
                    endpoint = %config.endpoint,
                    "falling back to running emulator: {e}"
                );
                Ok(Self::external(&config.endpoint))
            }
            Err(e) => Err(e),
        }
    }

    async fn start_container(tag: &str, timeout: Duration) -> Result<Self> {
        tracing::info!(tag, ?timeout, "starting localstack container");

        let container = within_startup_timeout(
            timeout,
            LocalStack::default()
                .with_tag(tag)
                .with_env_var("SERVICES", SERVICES)
                .start(),
        )
        .await?;

        let host = container
            .get_host()
            .await
            .map_err(|e| Error::Emulator(e.to_string()))?;
        let port = container
            .get_host_port_ipv4(EDGE_PORT)
            .await
            .map_err(|e| Error::Emulator(e.to_string()))?;

        let endpoint = format!("http://{host}:{port}");
        tracing::info!(%endpoint, id = container.id(), "localstack started");

        Ok(Self {
            endpoint,
            container: Some(container),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether this value owns a container.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        self.container.is_some()
    }
}

/// Await a container start, failing with [`Error::Emulator`] once `timeout`
/// has passed.
async fn within_startup_timeout<T, E>(
    timeout: Duration,
    start: impl Future<Output = std::result::Result<T, E>>,
) -> Result<T>
where
    E: fmt::Display,
{
    match tokio::time::timeout(timeout, start).await {
        Ok(Ok(container)) => Ok(container),
        Ok(Err(e)) => Err(Error::Emulator(e.to_string())),
        Err(_) => Err(Error::Emulator(format!(
            "container did not start within {timeout:?}"
        ))),
    }
}
