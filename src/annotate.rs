//! Caret marker lines for pointing at a location in a command.
//!
//! A marker line is printed directly beneath the source text as shown
//! by [`display_text`]: `^` under every highlighted character, spaces
//! elsewhere.

use crate::lexer::tokenize_vector;
use crate::location::{SourceLocation, SourceOffset};
use crate::source::CommandSource;

/// Indent vector sources are displayed with, mirroring a prompt.
const VECTOR_INDENT: &str = "  ";

/// Marker line for `location` within `source`.
///
/// For string sources every character position is tested, plus one
/// trailing position so end-of-input locations stay visible; the result
/// is one character longer than the text. For vector sources the
/// arguments are tokenized again and each one is marked whole when its
/// span lies within `location`.
#[must_use]
pub fn annotate(source: &CommandSource, location: &SourceLocation) -> String {
    match source {
        CommandSource::String(input) => {
            let width = input.as_str().chars().count() + 1;
            (0..width)
                .map(|char| {
                    if location.contains_offset(SourceOffset::new(char)) {
                        '^'
                    } else {
                        ' '
                    }
                })
                .collect()
        }
        CommandSource::Vector(input) => {
            let marks: Vec<String> = tokenize_vector(source, input)
                .iter()
                .map(|token| {
                    let mark = if location.contains(&token.span) {
                        '^'
                    } else {
                        ' '
                    };
                    std::iter::repeat_n(mark, token.text.chars().count()).collect::<String>()
                })
                .collect();
            format!("{VECTOR_INDENT}{}", marks.join(" "))
        }
    }
}

/// Marker line for a single offset, treated as a zero-width location.
#[must_use]
pub fn annotate_offset(source: &CommandSource, offset: SourceOffset) -> String {
    annotate(source, &SourceLocation::at(source.clone(), offset))
}

/// Source text laid out the way [`annotate`] expects to sit under it.
#[must_use]
pub fn display_text(source: &CommandSource) -> String {
    match source {
        CommandSource::String(input) => input.as_str().to_string(),
        CommandSource::Vector(input) => format!("{VECTOR_INDENT}{}", input.joined()),
    }
}

/// Display text and marker line, separated by a newline.
#[must_use]
pub fn render(source: &CommandSource, location: &SourceLocation) -> String {
    format!("{}\n{}", display_text(source), annotate(source, location))
}
