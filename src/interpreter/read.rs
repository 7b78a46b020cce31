use tracing::{debug, warn};

use crate::interpreter::{ErrorKind, Operator, Value};
use crate::reader::parser::{SyntaxTree, TAG_NUMBER, TAG_REGEX, TAG_ROOT, TAG_SEXPR, TAG_SYMBOL};

#[derive(Debug, PartialEq)]
enum NodeKind {
    Number,
    Symbol,
    List,
    Other,
}

// Tags may be compound (`expr|number|regex`), so check each part.
fn classify(tag: &str) -> NodeKind {
    let has = |name: &str| tag.split('|').any(|part| part == name);
    if has(TAG_NUMBER) {
        NodeKind::Number
    } else if has(TAG_SYMBOL) || has("operator") {
        NodeKind::Symbol
    } else if tag == TAG_ROOT || has(TAG_SEXPR) || has("expr") {
        NodeKind::List
    } else {
        NodeKind::Other
    }
}

fn is_ignorable(node: &SyntaxTree) -> bool {
    matches!(node.content.as_deref(), Some("(") | Some(")")) || node.tag.split('|').any(|part| part == TAG_REGEX)
}

fn read_number(node: &SyntaxTree) -> Value {
    let text = node.content.as_deref().unwrap_or_default();
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(e) => {
            debug!("read number / {:?}: {}", text, e);
            Value::Error(ErrorKind::BadNumber)
        }
    }
}

fn read_list(node: &SyntaxTree) -> Value {
    let items = node.children.iter().filter(|child| !is_ignorable(child)).map(read).collect();
    Value::Expression(items)
}

/// Convert one syntax tree node into a [`Value`].
///
/// The only failure a well-formed tree can produce is `BadNumber`, returned
/// in place as a value rather than aborting the read.
pub fn read(node: &SyntaxTree) -> Value {
    match classify(&node.tag) {
        NodeKind::Number => read_number(node),
        NodeKind::Symbol => Value::Symbol(Operator::resolve(node.content.as_deref().unwrap_or_default())),
        NodeKind::List => read_list(node),
        NodeKind::Other => {
            warn!("read / unexpected node tag {:?}", node.tag);
            Value::Error(ErrorKind::BadOperator)
        }
    }
}
