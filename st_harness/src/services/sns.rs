use aws_sdk_sns::Client;
use types::ResourceName;

use crate::error::{Error, Result, sdk};

/// Create a topic and return its ARN.
///
/// # Errors
///
/// If the request fails or the response has no ARN.
pub async fn create_topic(
    client: &Client,
    name: &ResourceName,
) -> Result<String> {
    let output = client
        .create_topic()
        .name(name.as_str())
        .send()
        .await
        .map_err(sdk("CreateTopic"))?;

    output.topic_arn.ok_or(Error::MissingField {
        operation: "CreateTopic",
        field: "TopicArn",
    })
}

/// Publish a message and return the id the service assigned to it.
///
/// # Errors
///
/// If the request fails or the message id is missing or empty.
pub async fn publish(
    client: &Client,
    topic_arn: &str,
    subject: &str,
    message: &str,
) -> Result<String> {
    let output = client
        .publish()
        .topic_arn(topic_arn)
        .subject(subject)
        .message(message)
        .send()
        .await
        .map_err(sdk("Publish"))?;

    output
        .message_id
        .filter(|id| !id.is_empty())
        .ok_or(Error::MissingField {
            operation: "Publish",
            field: "MessageId",
        })
}

/// # Errors
///
/// If the request fails.
pub async fn delete_topic(client: &Client, topic_arn: &str) -> Result<()> {
    client
        .delete_topic()
        .topic_arn(topic_arn)
        .send()
        .await
        .map_err(sdk("DeleteTopic"))?;

    Ok(())
}
