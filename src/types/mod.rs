//! Value types for parsed IAM identity ARNs.
//!
//! Accepted string forms:
//! - Assumed role: `arn:<partition>:sts:<region>:<account>:assumed-role/<role>/<session>`
//! - Role: `arn:<partition>:iam:<region>:<account>:role/[<path>/]<name>`
//! - User: `arn:<partition>:iam:<region>:<account>:user/[<path>/]<name>`
//!
//! Canonical form: `arn:<partition>:iam::<account>:role/<name>` or `.../user/<name>`.

mod arn_type;
mod parsed_arn;

pub use arn_type::{ArnField, ArnType, Service};
pub use parsed_arn::ParsedArn;
