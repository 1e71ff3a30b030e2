use aws_sdk_secretsmanager::client::Client as SecretsManagerClient;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_ssm::client::Client as SsmClient;
use aws_sdk_ssm::types::ParameterType;

/// Log a failed request and turn it into a message carrying the full error
/// chain.
fn request_failed<E: std::error::Error>(
    action: &'static str,
) -> impl FnOnce(E) -> String {
    move |e| {
        tracing::error!("failed to {action}: {:?}", e);
        DisplayErrorContext(&e).to_string()
    }
}

/// Create a secret in the secrets manager.
///
/// # Arguments
///
/// * `secrets_manager` - The secrets manager client
/// * `name` - The secret name
/// * `secret_string` - The value to store
///
/// # Returns
///
/// * `Result<String, String>` - The ARN of the new secret
///
/// # Errors
///
/// * `String` - The error message if the request fails or the response
///   carries no ARN.
///
pub async fn create_secret(
    secrets_manager: &SecretsManagerClient,
    name: &str,
    secret_string: &str,
) -> Result<String, String> {
    let secret = secrets_manager
        .create_secret()
        .name(name)
        .secret_string(secret_string)
        .send()
        .await
        .map_err(request_failed("create secret"))?;

    secret
        .arn
        .ok_or_else(|| "secret arn not found".to_string())
}

/// Get the string value of a secret.
///
/// # Arguments
///
/// * `secrets_manager` - The secrets manager client
/// * `secret_id` - The secret name or ARN
///
/// # Returns
///
/// * `Result<String, String>` - The secret string
///
/// # Errors
///
/// * `String` - The error message if the request fails or the secret holds
///   binary data only.
///
pub async fn get_secret_string(
    secrets_manager: &SecretsManagerClient,
    secret_id: &str,
) -> Result<String, String> {
    let secret = secrets_manager
        .get_secret_value()
        .secret_id(secret_id)
        .send()
        .await
        .map_err(request_failed("get secret"))?;

    secret
        .secret_string
        .ok_or_else(|| "secret string not found".to_string())
}

/// Delete a secret without a recovery window.
///
/// # Errors
///
/// * `String` - The error message if the request fails.
///
pub async fn delete_secret(
    secrets_manager: &SecretsManagerClient,
    secret_id: &str,
) -> Result<(), String> {
    secrets_manager
        .delete_secret()
        .secret_id(secret_id)
        .force_delete_without_recovery(true)
        .send()
        .await
        .map_err(request_failed("delete secret"))?;

    Ok(())
}

/// Store a plain string parameter.
///
/// # Errors
///
/// * `String` - The error message if the request fails, including when the
///   parameter already exists.
///
pub async fn put_parameter(
    ssm: &SsmClient,
    name: &str,
    value: &str,
) -> Result<(), String> {
    ssm.put_parameter()
        .name(name)
        .value(value)
        .r#type(ParameterType::String)
        .send()
        .await
        .map_err(request_failed("put parameter"))?;

    Ok(())
}

/// Get the value of a parameter.
///
/// # Errors
///
/// * `String` - The error message if the request fails or the response has
///   no value.
///
pub async fn get_parameter_value(
    ssm: &SsmClient,
    name: &str,
) -> Result<String, String> {
    let output = ssm
        .get_parameter()
        .name(name)
        // required for secretsmanager references, ignored for plain strings
        .with_decryption(true)
        .send()
        .await
        .map_err(request_failed("get parameter"))?;

    output
        .parameter
        .and_then(|parameter| parameter.value)
        .ok_or_else(|| format!("parameter {name} has no value"))
}

/// Delete a parameter.
///
/// # Errors
///
/// * `String` - The error message if the request fails.
///
pub async fn delete_parameter(
    ssm: &SsmClient,
    name: &str,
) -> Result<(), String> {
    ssm.delete_parameter()
        .name(name)
        .send()
        .await
        .map_err(request_failed("delete parameter"))?;

    Ok(())
}

/// Read a secret through SSM using the secrets manager reference path.
///
/// The parameter `/aws/reference/secretsmanager/<secret_name>` resolves to
/// the secret's current string value.
///
/// # Errors
///
/// * `String` - The error message if the reference cannot be resolved.
///
pub async fn get_secret_as_parameter(
    ssm: &SsmClient,
    secret_name: &str,
) -> Result<String, String> {
    let reference = types::secret_reference_parameter(secret_name);
    tracing::debug!(%reference, "resolving secret through ssm");

    get_parameter_value(ssm, &reference).await
}
