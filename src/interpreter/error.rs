use serde::{Deserialize, Serialize};

/// Semantic failures produced while reading or evaluating a value.
///
/// Parse diagnostics are not represented here; they belong to
/// [`crate::reader::ParseError`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[error("Division by zero!")]
    DivideByZero,
    #[error("Invalid operator!")]
    BadOperator,
    #[error("Invalid number!")]
    BadNumber,
}
