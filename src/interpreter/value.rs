use std::fmt;

use serde::{Deserialize, Serialize};

use crate::interpreter::{eval, ErrorKind, Operator};

#[derive(PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Number(i64),
    Error(ErrorKind),
    Symbol(Operator),
    Expression(Vec<Value>),
}

impl Value {
    pub fn from_vec(items: Vec<Value>) -> Value { Value::Expression(items) }

    pub fn symbol(name: &str) -> Value { Value::Symbol(Operator::resolve(name)) }

    pub fn is_error(&self) -> bool { matches!(self, Value::Error(_)) }

    /// Reduce to a `Number` or an `Error`.
    pub fn evaluate(&self) -> Value { eval(self).into() }
}

impl From<Result<i64, ErrorKind>> for Value {
    fn from(result: Result<i64, ErrorKind>) -> Value {
        match result {
            Ok(n) => Value::Number(n),
            Err(kind) => Value::Error(kind),
        }
    }
}

impl From<ErrorKind> for Value {
    fn from(kind: ErrorKind) -> Value { Value::Error(kind) }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(kind) => write!(f, "Error: {}", kind),
            Value::Symbol(ref op) => write!(f, "{}", op),
            Value::Expression(ref items) => {
                let strs: Vec<String> = items.iter().map(|v| format!("{}", v)).collect();
                write!(f, "({})", &strs.join(" "))
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Error(kind) => write!(f, "Error({:?})", kind),
            Value::Symbol(ref op) => write!(f, "'{}", op),
            Value::Expression(ref items) => {
                let strs: Vec<String> = items.iter().map(|v| format!("{:?}", v)).collect();
                write!(f, "({})", &strs.join(" "))
            }
            _ => write!(f, "{}", self),
        }
    }
}
