use std::time::Duration;

use aws_sdk_s3::error::DisplayErrorContext;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(Box<figment::Error>),

    #[error("emulator unavailable: {0}")]
    Emulator(String),

    #[error("{operation} failed: {message}")]
    Sdk {
        operation: &'static str,
        message: String,
    },

    #[error("invalid request: {0}")]
    Build(#[from] aws_sdk_s3::error::BuildError),

    #[error("{operation} response is missing {field}")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },

    #[error("failed to package function code: {0}")]
    Package(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("timed out after {waited:?} ({attempts} attempts) waiting for {what}")]
    Timeout {
        what: String,
        waited: Duration,
        attempts: u32,
    },
}

impl From<figment::Error> for Error {
    fn from(e: figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}

/// Map a failed SDK call into [`Error::Sdk`], logging the full error chain.
pub(crate) fn sdk<E: std::error::Error>(
    operation: &'static str,
) -> impl FnOnce(E) -> Error {
    move |e| {
        let message = DisplayErrorContext(&e).to_string();
        tracing::error!(operation, "request failed: {message}");
        Error::Sdk { operation, message }
    }
}
