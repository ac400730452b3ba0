//! Identity kinds and the AWS services that issue them.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// The service field of a supported identity ARN.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Service {
    /// Security Token Service, issuer of assumed-role sessions.
    Sts,
    /// Identity and Access Management, owner of roles and users.
    Iam,
}

/// The kind of identity an ARN names, taken from the first resource segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ArnType {
    /// An STS session, `assumed-role/<role>/<session>`.
    AssumedRole,
    /// An IAM role, `role/[<path>/]<name>`.
    Role,
    /// An IAM user, `user/[<path>/]<name>`.
    User,
}

impl ArnType {
    /// The only service under which this resource type is valid.
    pub fn service(&self) -> Service {
        match self {
            ArnType::AssumedRole => Service::Sts,
            ArnType::Role | ArnType::User => Service::Iam,
        }
    }

    /// The type used in the canonical ARN; sessions collapse onto their role.
    pub fn canonical(&self) -> ArnType {
        match self {
            ArnType::AssumedRole | ArnType::Role => ArnType::Role,
            ArnType::User => ArnType::User,
        }
    }

    /// Resolve a resource type token in the context of the ARN's service.
    ///
    /// Returns `None` for unknown tokens and for tokens that exist but belong
    /// to the other service (e.g. `assumed-role` under `iam`).
    pub fn for_service(token: &str, service: Service) -> Option<ArnType> {
        token
            .parse::<ArnType>()
            .ok()
            .filter(|ty| ty.service() == service)
    }
}

/// Named fields of an ARN, used when reporting a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "camelCase")]
pub enum ArnField {
    #[strum(serialize = "partition")]
    Partition,
    #[strum(serialize = "service")]
    Service,
    #[strum(serialize = "account")]
    Account,
    #[strum(serialize = "resource")]
    Resource,
    #[strum(serialize = "friendly name")]
    FriendlyName,
    #[strum(serialize = "session name")]
    SessionName,
}
