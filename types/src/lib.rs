mod defaults;
mod resource;

pub use defaults::{
    DEFAULT_AWS_ACCOUNT_ID, DEFAULT_ENDPOINT, DEFAULT_REGION,
    SECRETSMANAGER_REFERENCE_PREFIX, secret_reference_parameter,
};
pub use resource::{ResourceKind, ResourceName};
