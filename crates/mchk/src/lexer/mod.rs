//! Lexical scanner for the miniature C-like fragment

mod cursor;
mod scanner;
mod token;

pub use cursor::{find_text, skip_whitespace};
pub use scanner::{Lexer, tokenize};
pub use token::{KEYWORDS, OPERATORS, Token, TokenKind, is_keyword, is_operator};
