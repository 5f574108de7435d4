//! Property-based tests with proptest.
//!
//! Generate command lines from the characters the automaton accepts
//! outside quotes, then check coverage, determinism and the marker
//! line contract.

mod common;

use cmdlex::{CommandSource, SourceLocation, SourceOffset, TokenKind, annotate, tokenize};
use common::concat;
use proptest::prelude::*;

// -- Strategies --

/// Words, whitespace and specials; no quotes or backslashes.
fn plain_command() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./=:-]{0,6}([ \t;|?]{1,3}[a-zA-Z0-9_./=:-]{1,6}){0,6}[ \t]{0,2}"
}

/// Commands that may also contain closed quotes and escapes.
fn quoted_command() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z0-9-]{1,5}",
            "[ \t]{1,2}",
            "[;|?]",
            "\"[a-z ;|?]{0,5}\"",
            "\\\\[a-z; \"]",
        ],
        0..10,
    )
    .prop_map(|parts| parts.concat())
}

fn arguments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z ;\"]{0,6}", 0..6)
}

// -- Property tests --

proptest! {
    /// Token texts concatenate back to the input.
    #[test]
    fn tokens_cover_input(input in plain_command()) {
        let tokens = tokenize(&CommandSource::from_string(input.as_str())).expect("plain input");
        prop_assert_eq!(concat(&tokens), input);
    }

    /// Coverage also holds with quotes and escapes mixed in.
    #[test]
    fn tokens_cover_quoted_input(input in quoted_command()) {
        let tokens = tokenize(&CommandSource::from_string(input.as_str())).expect("closed input");
        prop_assert_eq!(concat(&tokens), input);
    }

    /// Spans are contiguous and each matches its token's text width.
    #[test]
    fn spans_are_contiguous(input in quoted_command()) {
        let tokens = tokenize(&CommandSource::from_string(input.as_str())).expect("closed input");
        let mut next = 0;
        for token in &tokens {
            prop_assert_eq!(token.start().char, next);
            prop_assert_eq!(token.span.width(), token.text.chars().count());
            next = token.end().char + 1;
        }
        prop_assert_eq!(next, input.chars().count());
    }

    /// No two adjacent tokens are both whitespace.
    #[test]
    fn whitespace_runs_are_merged(input in plain_command()) {
        let tokens = tokenize(&CommandSource::from_string(input.as_str())).expect("plain input");
        for pair in tokens.windows(2) {
            prop_assert!(
                !(pair[0].kind == TokenKind::Whitespace && pair[1].kind == TokenKind::Whitespace)
            );
        }
    }

    /// Tokenizing the same source twice gives equal results.
    #[test]
    fn tokenize_is_idempotent(input in quoted_command()) {
        let source = CommandSource::from_string(input);
        let first = tokenize(&source).expect("closed input");
        let second = tokenize(&source).expect("closed input");
        prop_assert_eq!(first, second);
    }

    /// Marker lines are one longer than the text and carets sit exactly
    /// on the contained offsets.
    #[test]
    fn annotate_marks_contained_offsets(
        input in plain_command(),
        start in 0usize..40,
        extra in 0usize..10,
    ) {
        let source = CommandSource::from_string(input.as_str());
        let location = SourceLocation::new(
            source.clone(),
            SourceOffset::new(start),
            SourceOffset::new(start + extra),
        );
        let marker = annotate(&source, &location);
        prop_assert_eq!(marker.chars().count(), input.chars().count() + 1);
        for (index, mark) in marker.chars().enumerate() {
            let inside = location.contains_offset(SourceOffset::new(index));
            prop_assert_eq!(mark == '^', inside);
        }
    }

    /// Vector sources yield one literal per argument, spans laid out
    /// over the joined text.
    #[test]
    fn vector_tokens_match_arguments(args in arguments()) {
        let source = CommandSource::from_args(args.clone());
        let tokens = tokenize(&source).expect("vector input");
        let joined = source.text().into_owned();
        prop_assert_eq!(tokens.len(), args.len());
        for (token, arg) in tokens.iter().zip(&args) {
            prop_assert_eq!(token.kind, TokenKind::StringLiteral);
            prop_assert_eq!(&token.text, arg);
            let found: String = joined
                .chars()
                .skip(token.start().char)
                .take(arg.chars().count())
                .collect();
            prop_assert_eq!(&found, arg);
        }
    }
}
