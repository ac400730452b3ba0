//! The structured form of an IAM identity ARN.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ArnError;
use crate::parser;

use super::arn_type::{ArnType, Service};

/// A validated IAM role, IAM user or STS assumed-role ARN.
///
/// Only the parser constructs this type, so every instance upholds:
/// - `partition`, `account_number` and `friendly_name` are non-empty.
/// - `session_info` is non-empty exactly when the type is `assumed-role`.
/// - `path` has no leading or trailing slash added by parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedArn {
    partition: String,
    account_number: String,
    #[serde(rename = "type")]
    arn_type: ArnType,
    /// Region as presented; identity ARNs conventionally leave it empty.
    region: String,
    path: String,
    friendly_name: String,
    session_info: String,
}

impl ParsedArn {
    pub(crate) fn new(
        partition: impl Into<String>,
        account_number: impl Into<String>,
        arn_type: ArnType,
        region: impl Into<String>,
        path: impl Into<String>,
        friendly_name: impl Into<String>,
        session_info: impl Into<String>,
    ) -> Self {
        ParsedArn {
            partition: partition.into(),
            account_number: account_number.into(),
            arn_type,
            region: region.into(),
            path: path.into(),
            friendly_name: friendly_name.into(),
            session_info: session_info.into(),
        }
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn arn_type(&self) -> ArnType {
        self.arn_type
    }

    /// The service the ARN was presented under, implied by its type.
    pub fn service(&self) -> Service {
        self.arn_type.service()
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    pub fn session_info(&self) -> &str {
        &self.session_info
    }

    /// Render the identity as `arn:{partition}:iam::{account}:{role|user}/{name}`.
    ///
    /// Path and session are dropped, an assumed-role session maps to the role
    /// it assumed, and the region is always empty. Two ARNs naming the same
    /// principal therefore produce the same string.
    pub fn canonical_arn(&self) -> String {
        format!(
            "arn:{partition}:{service}::{account}:{ty}/{name}",
            partition = self.partition,
            service = Service::Iam,
            account = self.account_number,
            ty = self.arn_type.canonical(),
            name = self.friendly_name,
        )
    }

    /// True when both ARNs identify the same principal.
    pub fn is_same_identity(&self, other: &ParsedArn) -> bool {
        self.canonical_arn() == other.canonical_arn()
    }
}

impl Display for ParsedArn {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}/",
            self.partition,
            self.service(),
            self.region,
            self.account_number,
            self.arn_type
        )?;
        match self.arn_type {
            ArnType::AssumedRole => write!(f, "{}/{}", self.friendly_name, self.session_info),
            ArnType::Role | ArnType::User if self.path.is_empty() => {
                write!(f, "{}", self.friendly_name)
            }
            ArnType::Role | ArnType::User => write!(f, "{}/{}", self.path, self.friendly_name),
        }
    }
}

impl FromStr for ParsedArn {
    type Err = ArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl TryFrom<&str> for ParsedArn {
    type Error = ArnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parser::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        assumed_role = {
            "arn:aws:sts::000000000000:assumed-role/my-role/session-name",
            "arn:aws:iam::000000000000:role/my-role"
        },
        role = {
            "arn:aws:iam::000000000000:role/my-role",
            "arn:aws:iam::000000000000:role/my-role"
        },
        role_with_path = {
            "arn:aws:iam::000000000000:role/path/to/my-role",
            "arn:aws:iam::000000000000:role/my-role"
        },
        user = {
            "arn:aws:iam::000000000000:user/my-user",
            "arn:aws:iam::000000000000:user/my-user"
        },
        user_with_path = {
            "arn:aws:iam::000000000000:user/path/to/my-user",
            "arn:aws:iam::000000000000:user/my-user"
        },
        other_partition = {
            "arn:aws-cn:sts::123456789012:assumed-role/deployer/ci-42",
            "arn:aws-cn:iam::123456789012:role/deployer"
        },
    )]
    fn test_canonical_arn(input: &str, expected: &str) {
        let parsed: ParsedArn = input.parse().unwrap();
        assert_eq!(parsed.canonical_arn(), expected);
    }

    #[test]
    fn test_canonical_arn_drops_region() {
        let parsed: ParsedArn = "arn:aws:iam:us-east-1:000000000000:role/my-role"
            .parse()
            .unwrap();
        assert_eq!(parsed.region(), "us-east-1");
        assert_eq!(parsed.canonical_arn(), "arn:aws:iam::000000000000:role/my-role");
    }

    #[parameterized(
        assumed_role = { "arn:aws:sts::000000000000:assumed-role/my-role/session-name" },
        role = { "arn:aws:iam::000000000000:role/my-role" },
        role_with_deep_path = { "arn:aws:iam::000000000000:role/some/path/to/my-role" },
        user_with_region = { "arn:aws-us-gov:iam:us-gov-west-1:000000000000:user/ops/alice" },
        empty_inner_segment = { "arn:aws:iam::000000000000:role/a//my-role" },
    )]
    fn test_display_reconstructs_input(input: &str) {
        let parsed = ParsedArn::try_from(input).unwrap();
        assert_eq!(parsed.to_string(), input);
    }

    #[test]
    fn test_same_identity_across_sessions_and_paths() {
        let session: ParsedArn = "arn:aws:sts::000000000000:assumed-role/my-role/a"
            .parse()
            .unwrap();
        let other_session: ParsedArn = "arn:aws:sts::000000000000:assumed-role/my-role/b"
            .parse()
            .unwrap();
        let role: ParsedArn = "arn:aws:iam::000000000000:role/path/my-role"
            .parse()
            .unwrap();
        let user: ParsedArn = "arn:aws:iam::000000000000:user/my-role".parse().unwrap();

        assert!(session.is_same_identity(&other_session));
        assert!(session.is_same_identity(&role));
        assert!(!role.is_same_identity(&user));
    }

    #[test]
    fn test_same_identity_respects_account() {
        let a: ParsedArn = "arn:aws:iam::111111111111:role/my-role".parse().unwrap();
        let b: ParsedArn = "arn:aws:iam::222222222222:role/my-role".parse().unwrap();
        assert!(!a.is_same_identity(&b));
    }

    #[test]
    fn test_service_follows_type() {
        let parsed: ParsedArn = "arn:aws:sts::000000000000:assumed-role/r/s".parse().unwrap();
        assert_eq!(parsed.service(), Service::Sts);
        let parsed: ParsedArn = "arn:aws:iam::000000000000:user/u".parse().unwrap();
        assert_eq!(parsed.service(), Service::Iam);
    }

    #[test]
    fn test_parsed_arn_serialization() {
        let parsed: ParsedArn = "arn:aws:iam::000000000000:role/path/to/my-role"
            .parse()
            .unwrap();
        insta::assert_json_snapshot!(parsed, @r#"
        {
          "partition": "aws",
          "accountNumber": "000000000000",
          "type": "role",
          "region": "",
          "path": "path/to",
          "friendlyName": "my-role",
          "sessionInfo": ""
        }
        "#);
    }
}
