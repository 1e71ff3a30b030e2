use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;

mod clients;
mod config;

pub use clients::ClientFactory;
pub use config::{Config, load_config};

/// A context that can be built once the configuration has been extracted.
///
/// Implementors own whatever needs the configuration to exist first, such as
/// the emulator they talk to and the clients pointed at it.
pub trait ContextProvider: Sized {
    type Error: From<figment::Error>;

    fn new(config: Config) -> impl Future<Output = Result<Self, Self::Error>>;
}

/// Initialize tracing and build a context from environment configuration.
///
/// The configuration is extracted using figment from `STRATUS_*`
/// environment variables and validated before it is handed over.
///
/// # Errors
/// If the configuration cannot be extracted or fails validation, or if the
/// context itself fails to build.
pub async fn create_app_context<A>() -> Result<A, A::Error>
where
    A: ContextProvider,
{
    init_tracing();

    let config = load_config()?;

    A::new(config).await
}

/// Install the global tracing subscriber.
///
/// Every test builds its own context, so a subscriber that is already set is
/// left in place.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        // allow log level to be overridden by RUST_LOG env var
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // route output through the test harness so it is captured per test
        .with_test_writer()
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

/// Load the shared AWS configuration pointed at the emulator endpoint.
///
/// Static credentials from the configuration are used so that no real
/// credential chain is consulted.
pub async fn load_sdk_config(
    config: &Config,
    endpoint: &str,
) -> aws_config::SdkConfig {
    tracing::debug!(endpoint, region = %config.region, "loading sdk config");

    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .endpoint_url(endpoint)
        .credentials_provider(Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "stratus",
        ))
        .load()
        .await
}
