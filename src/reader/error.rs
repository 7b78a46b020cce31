use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "ParseError at {}: {}", self.offset, self.message) }
}

impl std::error::Error for ParseError {}

#[macro_export]
macro_rules! parse_error {
    ($offset:expr, $($arg:tt)*) => (
        return Err($crate::reader::ParseError { message: format!($($arg)*), offset: $offset })
    )
}
