pub mod interpreter;
pub mod reader;

pub use interpreter::{execute, parse_code, ErrorKind, Outcome, Value};
pub use reader::ParseError;
