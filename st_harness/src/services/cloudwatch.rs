use aws_sdk_cloudwatch::Client;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum, StandardUnit};

use crate::error::{Result, sdk};

#[must_use]
pub fn dimension(name: &str, value: &str) -> Dimension {
    Dimension::builder().name(name).value(value).build()
}

/// `count` dimensions named `<name>0..` with values `<value>0..`.
#[must_use]
pub fn indexed_dimensions(
    name: &str,
    value: &str,
    count: usize,
) -> Vec<Dimension> {
    (0..count)
        .map(|i| dimension(&format!("{name}{i}"), &format!("{value}{i}")))
        .collect()
}

/// The current time truncated to whole seconds.
#[must_use]
pub fn current_timestamp() -> DateTime {
    DateTime::from_secs(chrono::Utc::now().timestamp())
}

/// A unitless datum for `metric_name`.
#[must_use]
pub fn datum(
    metric_name: &str,
    value: f64,
    timestamp: DateTime,
    dimensions: Vec<Dimension>,
) -> MetricDatum {
    MetricDatum::builder()
        .metric_name(metric_name)
        .unit(StandardUnit::None)
        .value(value)
        .timestamp(timestamp)
        .set_dimensions(Some(dimensions))
        .build()
}

/// Publish `data` into `namespace` in a single request.
///
/// # Errors
///
/// If the request fails.
pub async fn put_metric_data(
    client: &Client,
    namespace: &str,
    data: Vec<MetricDatum>,
) -> Result<()> {
    tracing::debug!(namespace, data = data.len(), "putting metric data");

    client
        .put_metric_data()
        .namespace(namespace)
        .set_metric_data(Some(data))
        .send()
        .await
        .map_err(sdk("PutMetricData"))?;

    Ok(())
}
