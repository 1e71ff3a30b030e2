use aws_sdk_kinesis::Client;
use aws_sdk_kinesis::operation::create_stream::CreateStreamOutput;
use aws_sdk_kinesis::operation::put_record::PutRecordOutput;
use aws_sdk_kinesis::primitives::Blob;
use aws_sdk_kinesis::types::StreamStatus;
use types::ResourceName;

use crate::error::{Error, Result, sdk};
use crate::wait::{WaitPolicy, wait_until};

/// # Errors
///
/// If the request fails.
pub async fn create_stream(
    client: &Client,
    name: &ResourceName,
    shard_count: i32,
) -> Result<CreateStreamOutput> {
    client
        .create_stream()
        .stream_name(name.as_str())
        .shard_count(shard_count)
        .send()
        .await
        .map_err(sdk("CreateStream"))
}

/// Whether the stream has finished creating.
///
/// # Errors
///
/// If the request fails or the response carries no summary.
pub async fn is_active(client: &Client, name: &ResourceName) -> Result<bool> {
    let output = client
        .describe_stream_summary()
        .stream_name(name.as_str())
        .send()
        .await
        .map_err(sdk("DescribeStreamSummary"))?;

    let summary = output
        .stream_description_summary()
        .ok_or(Error::MissingField {
            operation: "DescribeStreamSummary",
            field: "StreamDescriptionSummary",
        })?;

    Ok(*summary.stream_status() == StreamStatus::Active)
}

/// Wait for a freshly created stream to accept records.
///
/// # Errors
///
/// [`Error::Timeout`] if the stream is still not active when the window
/// closes, or the first failed describe request.
pub async fn wait_until_active(
    client: &Client,
    name: &ResourceName,
    policy: &WaitPolicy,
) -> Result<()> {
    wait_until(policy, "stream to become active", move || {
        is_active(client, name)
    })
    .await?;

    Ok(())
}

/// # Errors
///
/// If the request fails.
pub async fn put_record(
    client: &Client,
    name: &ResourceName,
    data: &[u8],
    partition_key: &str,
) -> Result<PutRecordOutput> {
    client
        .put_record()
        .stream_name(name.as_str())
        .data(Blob::new(data))
        .partition_key(partition_key)
        .send()
        .await
        .map_err(sdk("PutRecord"))
}

/// # Errors
///
/// If the request fails.
pub async fn delete_stream(client: &Client, name: &ResourceName) -> Result<()> {
    client
        .delete_stream()
        .stream_name(name.as_str())
        .enforce_consumer_deletion(true)
        .send()
        .await
        .map_err(sdk("DeleteStream"))?;

    Ok(())
}
