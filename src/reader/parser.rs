use std::fmt;
use std::iter::Peekable;
use std::vec;

use crate::parse_error;
use crate::reader::lexer::{tokenize, Token, TokenValue};
use crate::reader::ParseError;

pub const TAG_ROOT: &str = ">";
pub const TAG_NUMBER: &str = "number";
pub const TAG_SYMBOL: &str = "symbol";
pub const TAG_SEXPR: &str = "sexpr";
pub const TAG_CHAR: &str = "char";
pub const TAG_REGEX: &str = "regex";

/// Deepest `(` nesting accepted; reading and evaluation recurse once per level.
pub const MAX_DEPTH: usize = 256;

/// A generic labeled tree: `tag`, optional literal `content`, ordered `children`.
///
/// Leaves carry content (`number`, `symbol`, `char`); groupings (`>`, `sexpr`)
/// carry children. Every `sexpr` keeps its `(` and `)` as `char` leaves, and the
/// root is bracketed by empty `regex` anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub tag: String,
    pub content: Option<String>,
    pub children: Vec<SyntaxTree>,
}

impl SyntaxTree {
    pub fn leaf(tag: &str, content: impl Into<String>) -> SyntaxTree {
        SyntaxTree {
            tag: tag.to_string(),
            content: Some(content.into()),
            children: Vec::new(),
        }
    }

    pub fn branch(tag: &str, children: Vec<SyntaxTree>) -> SyntaxTree {
        SyntaxTree {
            tag: tag.to_string(),
            content: None,
            children,
        }
    }

    fn anchor() -> SyntaxTree { SyntaxTree::branch(TAG_REGEX, Vec::new()) }
}

// tag 'content' [children...], one node per line
impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { self.write_indented(f, 0) }
}

impl SyntaxTree {
    fn write_indented(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.tag, indent = depth * 2)?;
        if let Some(ref content) = self.content {
            write!(f, " '{}'", content)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

type Tokens = Peekable<vec::IntoIter<Token>>;

fn parse_sexpr(open: usize, depth: usize, tokens: &mut Tokens) -> Result<SyntaxTree, ParseError> {
    if depth > MAX_DEPTH {
        parse_error!(open, "nesting too deep (more than {} levels)", MAX_DEPTH)
    }
    let mut children = vec![SyntaxTree::leaf(TAG_CHAR, "(")];
    loop {
        match tokens.peek() {
            None => parse_error!(open, "unclosed `(`"),
            Some(Token { value: TokenValue::RParen, .. }) => {
                tokens.next();
                children.push(SyntaxTree::leaf(TAG_CHAR, ")"));
                return Ok(SyntaxTree::branch(TAG_SEXPR, children));
            }
            Some(_) => children.push(parse_expr(depth, tokens)?),
        }
    }
}

fn parse_expr(depth: usize, tokens: &mut Tokens) -> Result<SyntaxTree, ParseError> {
    match tokens.next() {
        Some(Token { value: TokenValue::Number(text), .. }) => Ok(SyntaxTree::leaf(TAG_NUMBER, text)),
        Some(Token { value: TokenValue::Symbol(text), .. }) => Ok(SyntaxTree::leaf(TAG_SYMBOL, text)),
        Some(Token { value: TokenValue::LParen, offset }) => parse_sexpr(offset, depth + 1, tokens),
        Some(Token { value: TokenValue::RParen, offset }) => parse_error!(offset, "unexpected `)`"),
        None => parse_error!(0, "unexpected end of input"),
    }
}

/// program := regex expr* regex
pub fn parse(src: &str) -> Result<SyntaxTree, ParseError> {
    let mut tokens = tokenize(src).into_iter().peekable();
    let mut children = vec![SyntaxTree::anchor()];
    while tokens.peek().is_some() {
        children.push(parse_expr(0, &mut tokens)?);
    }
    children.push(SyntaxTree::anchor());
    Ok(SyntaxTree::branch(TAG_ROOT, children))
}
