use aws_sdk_sqs::Client;
use types::ResourceName;

use crate::error::{Error, Result, sdk};

/// Create a queue and return its URL.
///
/// # Errors
///
/// If the request fails or the response has no queue URL.
pub async fn create_queue(
    client: &Client,
    name: &ResourceName,
) -> Result<String> {
    let output = client
        .create_queue()
        .queue_name(name.as_str())
        .send()
        .await
        .map_err(sdk("CreateQueue"))?;

    output.queue_url.ok_or(Error::MissingField {
        operation: "CreateQueue",
        field: "QueueUrl",
    })
}

/// Whether `queue_url` ends in `/<account_id>/<queue_name>`.
///
/// Holds for both path-style and host-prefixed emulator URLs.
#[must_use]
pub fn queue_url_matches(
    queue_url: &str,
    account_id: &str,
    queue_name: &str,
) -> bool {
    let mut segments = queue_url.trim_end_matches('/').rsplit('/');

    segments.next() == Some(queue_name) && segments.next() == Some(account_id)
}

/// # Errors
///
/// If the request fails.
pub async fn delete_queue(client: &Client, queue_url: &str) -> Result<()> {
    client
        .delete_queue()
        .queue_url(queue_url)
        .send()
        .await
        .map_err(sdk("DeleteQueue"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "000000000000";

    #[test]
    fn test_queue_url_matches_path_style() {
        assert!(queue_url_matches(
            "http://localhost:4566/000000000000/test-q-1",
            ACCOUNT,
            "test-q-1"
        ));
    }

    #[test]
    fn test_queue_url_matches_host_prefixed() {
        assert!(queue_url_matches(
            "http://sqs.us-east-1.localhost.localstack.cloud:4566/000000000000/test-q-1",
            ACCOUNT,
            "test-q-1"
        ));
    }

    #[test]
    fn test_queue_url_rejects_other_account() {
        assert!(!queue_url_matches(
            "http://localhost:4566/123456789012/test-q-1",
            ACCOUNT,
            "test-q-1"
        ));
    }

    #[test]
    fn test_queue_url_rejects_name_prefix() {
        assert!(!queue_url_matches(
            "http://localhost:4566/000000000000/test-q-10",
            ACCOUNT,
            "test-q-1"
        ));
        assert!(!queue_url_matches("test-q-1", ACCOUNT, "test-q-1"));
    }
}
