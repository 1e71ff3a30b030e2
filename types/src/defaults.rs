/// Account id the emulator stamps into ARNs and queue URLs.
pub const DEFAULT_AWS_ACCOUNT_ID: &str = "000000000000";

pub const DEFAULT_REGION: &str = "us-east-1";

/// Edge endpoint of a locally running emulator.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4566";

/// SSM parameter path prefix that resolves to a Secrets Manager secret.
pub const SECRETSMANAGER_REFERENCE_PREFIX: &str =
    "/aws/reference/secretsmanager/";

/// Build the SSM parameter name that references the given secret.
///
/// Reading this parameter through SSM returns the secret's current value.
///
/// # Example
///
/// ```rust
/// assert_eq!(
///     types::secret_reference_parameter("db-password"),
///     "/aws/reference/secretsmanager/db-password"
/// );
/// ```
#[must_use]
pub fn secret_reference_parameter(secret_name: &str) -> String {
    format!("{SECRETSMANAGER_REFERENCE_PREFIX}{secret_name}")
}
