use std::fmt;

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::interpreter::ErrorKind;

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
#[serde(into = "String")]
#[serde(from = "String")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    /// Any symbol text outside the table, kept so it can be printed back.
    Unknown(String),
}

pub static OPERATORS: phf::Map<&'static str, Operator> = phf_map! {
    "+" => Operator::Add,
    "-" => Operator::Sub,
    "*" => Operator::Mul,
    "/" => Operator::Div,
    "%" => Operator::Rem,
};

impl Operator {
    pub fn resolve(name: &str) -> Operator { OPERATORS.get(name).cloned().unwrap_or_else(|| Operator::Unknown(name.to_string())) }

    pub fn as_str(&self) -> &str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::Unknown(name) => name,
        }
    }

    /// Combine accumulator `x` with the next operand `y`.
    ///
    /// Division and remainder truncate toward zero; a result outside `i64` is `BadNumber`.
    pub fn apply(&self, x: i64, y: i64) -> Result<i64, ErrorKind> {
        match self {
            Operator::Add => x.checked_add(y).ok_or(ErrorKind::BadNumber),
            Operator::Sub => x.checked_sub(y).ok_or(ErrorKind::BadNumber),
            Operator::Mul => x.checked_mul(y).ok_or(ErrorKind::BadNumber),
            Operator::Div | Operator::Rem if y == 0 => Err(ErrorKind::DivideByZero),
            Operator::Div => x.checked_div(y).ok_or(ErrorKind::BadNumber),
            // i64::MIN % -1 is mathematically 0
            Operator::Rem => Ok(x.wrapping_rem(y)),
            Operator::Unknown(_) => Err(ErrorKind::BadOperator),
        }
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> String { op.as_str().to_string() }
}

impl From<String> for Operator {
    fn from(name: String) -> Operator { Operator::resolve(&name) }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.as_str()) }
}
