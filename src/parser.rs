//! Grammar for IAM identity ARNs.
//!
//! ```text
//! arn:<partition>:<service>:<region>:<account>:<resource>
//!
//! resource (sts) = assumed-role/<role>/<session>
//! resource (iam) = role/[<path>/]<name> | user/[<path>/]<name>
//! ```
//!
//! Checks run in order and the first failure is reported.

use tracing::debug;

use crate::error::ArnError;
use crate::types::{ArnField, ArnType, ParsedArn, Service};

const ARN_PREFIX: &str = "arn";
const FIELD_COUNT: usize = 6;

/// Parse and validate `raw` as an IAM role, IAM user or STS assumed-role ARN.
///
/// On failure nothing is returned but the error; there is no partial result.
pub fn parse(raw: &str) -> Result<ParsedArn, ArnError> {
    match parse_fields(raw) {
        Ok(parsed) => {
            debug!(
                event = "ArnParse",
                phase = "Parsed",
                arn = raw,
                canonical = parsed.canonical_arn()
            );
            Ok(parsed)
        }
        Err(err) => {
            debug!(event = "ArnParse", phase = "Rejected", arn = raw, reason = %err);
            Err(err)
        }
    }
}

fn parse_fields(raw: &str) -> Result<ParsedArn, ArnError> {
    let fields: Vec<&str> = raw.split(':').collect();
    let [prefix, partition, service, region, account, resource] = fields[..] else {
        return Err(ArnError::MalformedStructure {
            arn: raw.to_string(),
            fields: if raw.is_empty() { 0 } else { fields.len() },
        });
    };

    if prefix != ARN_PREFIX {
        return Err(ArnError::InvalidPrefix {
            arn: raw.to_string(),
        });
    }
    require(raw, partition, ArnField::Partition)?;
    require(raw, service, ArnField::Service)?;
    let service: Service = service.parse().map_err(|_| ArnError::UnsupportedService {
        arn: raw.to_string(),
        service: service.to_string(),
    })?;
    require(raw, account, ArnField::Account)?;
    require(raw, resource, ArnField::Resource)?;

    let segments: Vec<&str> = resource.split('/').collect();
    let token = segments[0];
    let arn_type = ArnType::for_service(token, service).ok_or_else(|| {
        ArnError::UnsupportedResourceType {
            arn: raw.to_string(),
            resource_type: token.to_string(),
            service: service.to_string(),
        }
    })?;

    let resource = match arn_type {
        ArnType::AssumedRole => assumed_role_resource(raw, &segments)?,
        ArnType::Role | ArnType::User => iam_resource(raw, &segments)?,
    };

    Ok(ParsedArn::new(
        partition,
        account,
        arn_type,
        region,
        resource.path,
        resource.friendly_name,
        resource.session_info,
    ))
}

struct ResourceParts<'a> {
    path: String,
    friendly_name: &'a str,
    session_info: &'a str,
}

fn require(raw: &str, value: &str, field: ArnField) -> Result<(), ArnError> {
    if value.is_empty() {
        return Err(ArnError::MissingField {
            arn: raw.to_string(),
            field,
        });
    }
    Ok(())
}

/// `assumed-role/<role>/<session>`, exactly three segments.
fn assumed_role_resource<'a>(
    raw: &str,
    segments: &[&'a str],
) -> Result<ResourceParts<'a>, ArnError> {
    let [_, friendly_name, session_info] = segments[..] else {
        return Err(ArnError::MalformedResource {
            arn: raw.to_string(),
            reason: format!(
                "assumed-role resource needs exactly 3 '/'-separated segments, found {}",
                segments.len()
            ),
        });
    };
    require(raw, friendly_name, ArnField::FriendlyName)?;
    require(raw, session_info, ArnField::SessionName)?;

    Ok(ResourceParts {
        path: String::new(),
        friendly_name,
        session_info,
    })
}

/// `role/[<path>/]<name>` or `user/[<path>/]<name>`.
fn iam_resource<'a>(raw: &str, segments: &[&'a str]) -> Result<ResourceParts<'a>, ArnError> {
    let (path, friendly_name) = match segments {
        [_, path @ .., friendly_name] => (path, *friendly_name),
        _ => {
            return Err(ArnError::MalformedResource {
                arn: raw.to_string(),
                reason: format!("'{}' resource has no name", segments.join("/")),
            });
        }
    };
    require(raw, friendly_name, ArnField::FriendlyName)?;

    Ok(ResourceParts {
        path: path.join("/"),
        friendly_name,
        session_info: "",
    })
}
