// src/lib.rs
pub use error::ArnError;
pub use parser::parse;
pub use types::{ArnField, ArnType, ParsedArn, Service};

mod error;
mod parser;
mod types;
