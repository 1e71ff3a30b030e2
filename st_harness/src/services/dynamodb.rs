use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput,
    ScalarAttributeType, TableDescription,
};
use types::ResourceName;

use crate::error::{Error, Result, sdk};

/// Read and write capacity requested for check tables.
const CAPACITY_UNITS: i64 = 5;

/// Create a table keyed by a single string hash key.
///
/// # Errors
///
/// If a request part fails validation, the request fails, or the response
/// has no table description.
pub async fn create_table(
    client: &Client,
    name: &ResourceName,
    hash_key: &str,
) -> Result<TableDescription> {
    let output = client
        .create_table()
        .table_name(name.as_str())
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(hash_key)
                .key_type(KeyType::Hash)
                .build()?,
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(hash_key)
                .attribute_type(ScalarAttributeType::S)
                .build()?,
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(CAPACITY_UNITS)
                .write_capacity_units(CAPACITY_UNITS)
                .build()?,
        )
        .send()
        .await
        .map_err(sdk("CreateTable"))?;

    output.table_description.ok_or(Error::MissingField {
        operation: "CreateTable",
        field: "TableDescription",
    })
}

/// # Errors
///
/// If the request fails.
pub async fn delete_table(client: &Client, name: &ResourceName) -> Result<()> {
    client
        .delete_table()
        .table_name(name.as_str())
        .send()
        .await
        .map_err(sdk("DeleteTable"))?;

    Ok(())
}
