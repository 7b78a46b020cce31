#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    LParen,
    RParen,
    Number(String),
    Symbol(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: TokenValue,
    /// byte offset of the first character
    pub offset: usize,
}

// -?[0-9]+
fn is_number(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_delimiter(c: char) -> bool { c.is_whitespace() || c == '(' || c == ')' }

pub fn tokenize(src: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(offset, c)) = chars.peek() {
        match c {
            _ if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token { value: TokenValue::LParen, offset });
            }
            ')' => {
                chars.next();
                tokens.push(Token { value: TokenValue::RParen, offset });
            }
            _ => {
                let mut end = offset;
                while let Some(&(i, c)) = chars.peek() {
                    if is_delimiter(c) {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                let text = src[offset..end].to_string();
                let value = if is_number(&text) { TokenValue::Number(text) } else { TokenValue::Symbol(text) };
                tokens.push(Token { value, offset });
            }
        }
    }
    tokens
}
