#![allow(dead_code)]

use cmdlex::{CommandSource, Token, TokenKind, tokenize};

pub fn lex(input: &str) -> Vec<Token> {
    tokenize(&CommandSource::from_string(input)).expect("tokenize failed")
}

/// Kind, text and inclusive char span of every token.
pub fn summary(tokens: &[Token]) -> Vec<(TokenKind, String, usize, usize)> {
    tokens
        .iter()
        .map(|t| (t.kind, t.text.clone(), t.start().char, t.end().char))
        .collect()
}

pub fn tok(
    kind: TokenKind,
    text: &str,
    start: usize,
    end: usize,
) -> (TokenKind, String, usize, usize) {
    (kind, text.to_string(), start, end)
}

/// Token texts concatenated in order.
pub fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
