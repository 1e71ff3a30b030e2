use std::io::{Cursor, Write};

use aws_sdk_lambda::Client;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::{FunctionCode, FunctionConfiguration, Runtime};
use types::ResourceName;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Result, sdk};

/// File name of the handler inside the deployment package.
pub const HANDLER_FILE: &str = "handler.py";

/// Handler entry point, `<module>.<function>`.
pub const HANDLER: &str = "handler.handler";

const HANDLER_SOURCE: &str = r#"def handler(event, context):
    return {"statusCode": 200, "body": event}
"#;

/// Zip the handler source into an in-memory deployment package.
///
/// # Errors
///
/// If the archive cannot be written.
pub fn package_handler() -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    zip.start_file(HANDLER_FILE, options)?;
    zip.write_all(HANDLER_SOURCE.as_bytes())?;

    Ok(zip.finish()?.into_inner())
}

/// Role the emulator is told to run functions as.
#[must_use]
pub fn execution_role_arn(account_id: &str) -> String {
    format!("arn:aws:iam::{account_id}:role/lambda-role")
}

/// Create a Python function from [`package_handler`].
///
/// # Errors
///
/// If packaging or the request fails.
pub async fn create_function(
    client: &Client,
    name: &ResourceName,
    role_arn: &str,
) -> Result<()> {
    let code = FunctionCode::builder()
        .zip_file(Blob::new(package_handler()?))
        .build();

    client
        .create_function()
        .function_name(name.as_str())
        .runtime(Runtime::Python312)
        .role(role_arn)
        .handler(HANDLER)
        .code(code)
        .send()
        .await
        .map_err(sdk("CreateFunction"))?;

    Ok(())
}

/// Walk every page of `ListFunctions` and keep the functions called `name`.
///
/// # Errors
///
/// If any page request fails.
pub async fn functions_named(
    client: &Client,
    name: &ResourceName,
) -> Result<Vec<FunctionConfiguration>> {
    let functions = client
        .list_functions()
        .into_paginator()
        .items()
        .send()
        .try_collect()
        .await
        .map_err(sdk("ListFunctions"))?;

    Ok(functions
        .into_iter()
        .filter(|function| function.function_name() == Some(name.as_str()))
        .collect())
}

/// # Errors
///
/// If the request fails.
pub async fn delete_function(
    client: &Client,
    name: &ResourceName,
) -> Result<()> {
    client
        .delete_function()
        .function_name(name.as_str())
        .send()
        .await
        .map_err(sdk("DeleteFunction"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_package_contains_handler() {
        let package = package_handler().expect("package");
        let mut archive =
            ZipArchive::new(Cursor::new(package)).expect("valid zip");

        assert_eq!(archive.len(), 1);

        let mut source = String::new();
        archive
            .by_name(HANDLER_FILE)
            .expect("handler file")
            .read_to_string(&mut source)
            .expect("utf-8 source");
        assert_eq!(source, HANDLER_SOURCE);
    }

    #[test]
    fn test_handler_names_packaged_module() {
        let module = HANDLER.split('.').next().expect("module");
        assert_eq!(format!("{module}.py"), HANDLER_FILE);
    }

    #[test]
    fn test_execution_role_arn() {
        assert_eq!(
            execution_role_arn("000000000000"),
            "arn:aws:iam::000000000000:role/lambda-role"
        );
    }
}
