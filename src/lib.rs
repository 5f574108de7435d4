//! Lexical front end for command-line interfaces.
//!
//! Turns command text, typed as one string or handed over as a
//! pre-split argument vector, into classified tokens that each know the
//! exact span they came from, and renders caret marker lines that point
//! at a span for error and completion display.
//!
//! # Quick start
//!
//! ## Tokenize typed input
//!
//! ```
//! use cmdlex::{CommandSource, TokenKind, tokenize};
//!
//! let source = CommandSource::from_string("show \"ip route\"; exit");
//! let tokens = tokenize(&source).unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [
//!     TokenKind::Word,
//!     TokenKind::Whitespace,
//!     TokenKind::StringLiteral,
//!     TokenKind::Special,
//!     TokenKind::Whitespace,
//!     TokenKind::Word,
//! ]);
//! assert_eq!(tokens[2].text, "\"ip route\"");
//! ```
//!
//! ## Point at a lexer error
//!
//! ```
//! use cmdlex::{CommandSource, tokenize};
//!
//! let source = CommandSource::from_string("echo \"oops");
//! let err = tokenize(&source).unwrap_err();
//! assert_eq!(err.message(), "unclosed quote at end of input");
//! assert_eq!(err.annotation(), "          ^");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod annotate;
pub mod lexer;
pub mod location;
pub mod source;
pub mod token;

pub use annotate::{annotate, annotate_offset, display_text, render};
pub use lexer::{LexError, LexErrorKind, tokenize};
pub use location::{SourceLocation, SourceOffset};
pub use source::{CommandSource, StringSource, VectorSource, source_text};
pub use token::{Token, TokenKind};
