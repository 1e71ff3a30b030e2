use aws_sdk_s3::Client;
use aws_sdk_s3::types::{
    Bucket, BucketLocationConstraint, CreateBucketConfiguration,
};
use types::ResourceName;

use crate::error::{Result, sdk};

/// Create a bucket in the client's region.
///
/// Outside `us-east-1` the region has to be sent as a location constraint.
///
/// # Errors
///
/// If the request fails.
pub async fn create_bucket(client: &Client, name: &ResourceName) -> Result<()> {
    let mut request = client.create_bucket().bucket(name.as_str());

    let region = client.config().region().map(ToString::to_string);
    if let Some(region) = region.filter(|region| region != "us-east-1") {
        let constraint = BucketLocationConstraint::from(region.as_str());
        request = request.create_bucket_configuration(
            CreateBucketConfiguration::builder()
                .location_constraint(constraint)
                .build(),
        );
    }

    request.send().await.map_err(sdk("CreateBucket"))?;

    Ok(())
}

/// List every bucket and keep the ones called `name`.
///
/// # Errors
///
/// If the request fails.
pub async fn buckets_named(
    client: &Client,
    name: &ResourceName,
) -> Result<Vec<Bucket>> {
    let output = client
        .list_buckets()
        .send()
        .await
        .map_err(sdk("ListBuckets"))?;

    Ok(output
        .buckets()
        .iter()
        .filter(|bucket| bucket.name() == Some(name.as_str()))
        .cloned()
        .collect())
}

/// # Errors
///
/// If the request fails.
pub async fn delete_bucket(client: &Client, name: &ResourceName) -> Result<()> {
    client
        .delete_bucket()
        .bucket(name.as_str())
        .send()
        .await
        .map_err(sdk("DeleteBucket"))?;

    Ok(())
}
