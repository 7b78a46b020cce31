//! Text front end: turns one input line into a generic labeled [`parser::SyntaxTree`].
//!
//! Nothing here knows about values or evaluation; the interpreter only consumes
//! the tree shape produced by [`parser::parse`].

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::ParseError;
pub use parser::{parse, SyntaxTree};
