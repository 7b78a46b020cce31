pub mod error;
pub mod eval;
pub mod operator;
pub mod read;
pub mod value;


use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::reader::{self, ParseError};

pub use error::ErrorKind;
pub use eval::eval;
pub use operator::{Operator, OPERATORS};
pub use read::read;
pub use value::Value;

/// One evaluated input line: the expression as read, and what it reduced to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub expression: Value,
    pub result: Value,
}

impl Outcome {
    pub fn is_error(&self) -> bool { self.result.is_error() }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "Result: {}", self.result) }
}

pub fn parse_code(src: &str) -> Result<Value, ParseError> {
    let tree = reader::parse(src)?;
    Ok(read(&tree))
}

/// Parse, read and evaluate one line.
///
/// Only parse diagnostics come back as `Err`; evaluation failures are an
/// `Outcome` whose result is `Value::Error`.
pub fn execute(src: &str) -> Result<Outcome, ParseError> {
    let expression = parse_code(src)?;
    let result = expression.evaluate();
    info!("execute / {} => {}", expression, result);
    Ok(Outcome { expression, result })
}
