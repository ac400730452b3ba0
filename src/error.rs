use serde::Serialize;
use thiserror::Error;

use crate::types::ArnField;

/// Why a string was not accepted as an IAM identity ARN.
///
/// Every variant is an "invalid ARN" failure; the variant only narrows down
/// the reason. Callers that do not care can match on `ArnError` as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ArnError {
    #[error("invalid ARN '{arn}': expected 6 colon-separated fields, found {fields}")]
    MalformedStructure { arn: String, fields: usize },

    #[error("invalid ARN '{arn}': must start with 'arn'")]
    InvalidPrefix { arn: String },

    #[error("invalid ARN '{arn}': missing {field}")]
    MissingField { arn: String, field: ArnField },

    #[error("invalid ARN '{arn}': unsupported service '{service}' (expected 'sts' or 'iam')")]
    UnsupportedService { arn: String, service: String },

    #[error(
        "invalid ARN '{arn}': unsupported resource type '{resource_type}' for service '{service}'"
    )]
    UnsupportedResourceType {
        arn: String,
        resource_type: String,
        service: String,
    },

    #[error("invalid ARN '{arn}': {reason}")]
    MalformedResource { arn: String, reason: String },
}

impl ArnError {
    /// The raw input that was rejected.
    pub fn arn(&self) -> &str {
        match self {
            ArnError::MalformedStructure { arn, .. }
            | ArnError::InvalidPrefix { arn }
            | ArnError::MissingField { arn, .. }
            | ArnError::UnsupportedService { arn, .. }
            | ArnError::UnsupportedResourceType { arn, .. }
            | ArnError::MalformedResource { arn, .. } => arn,
        }
    }
}
