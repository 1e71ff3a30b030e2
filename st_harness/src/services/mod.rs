//! Requests made by the checks, one module per emulated service.
//!
//! Every function takes the service client, issues its request(s) and
//! returns the piece of the response a check asserts on.

pub mod cloudwatch;
pub mod dynamodb;
pub mod iam;
pub mod kinesis;
pub mod lambda;
pub mod s3;
pub mod sns;
pub mod sqs;
