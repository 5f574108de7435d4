use crate::location::{SourceLocation, SourceOffset};

/// Token kinds produced by the tokenizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Unquoted run of graphic characters, backslash escapes included.
    Word,
    /// Run of whitespace.
    Whitespace,
    /// Single `;`, `?` or `|`.
    Special,
    /// Double-quoted string (quotes included), or one element of a
    /// vector source.
    StringLiteral,
}

/// A classified substring with the span it was read from.
///
/// `text` is the exact source text of the span: quotes and escaping
/// backslashes are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub span: SourceLocation,
}

impl Token {
    #[must_use]
    pub const fn start(&self) -> SourceOffset {
        self.span.start()
    }

    #[must_use]
    pub const fn end(&self) -> SourceOffset {
        self.span.end()
    }

    /// Whitespace carries no meaning for a parser but keeps spans contiguous.
    #[must_use]
    pub fn is_trivia(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}
