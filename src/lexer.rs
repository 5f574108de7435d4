use std::fmt;

use tracing::{debug, trace};

use crate::annotate;
use crate::location::{SourceLocation, SourceOffset};
use crate::source::{CommandSource, StringSource, VectorSource};
use crate::token::{Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character not allowed in the current state: a control character
    /// outside quotes, or a non-graphic character after a backslash.
    InvalidCharacter(char),
    /// Input ends right after an escaping backslash.
    EscapeAtEndOfInput,
    /// Input ends inside a double-quoted string.
    UnclosedQuote,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(ch) => {
                write!(f, "invalid character {ch:?}")
            }
            Self::EscapeAtEndOfInput => {
                write!(f, "escaping backslash at end of input")
            }
            Self::UnclosedQuote => {
                write!(f, "unclosed quote at end of input")
            }
        }
    }
}

/// Error produced during tokenization.
///
/// `offset` is the offending character, or one past the last character
/// for end-of-input errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at character {}", offset.char)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub input: CommandSource,
    pub full_text: String,
    pub offset: SourceOffset,
}

impl LexError {
    fn new(kind: LexErrorKind, input: &CommandSource, full_text: &str, offset: usize) -> Self {
        Self {
            kind,
            input: input.clone(),
            full_text: full_text.to_string(),
            offset: SourceOffset::new(offset),
        }
    }

    /// Human-readable message without the location suffix.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Zero-width location of the failure.
    #[must_use]
    pub fn location(&self) -> SourceLocation {
        SourceLocation::at(self.input.clone(), self.offset)
    }

    /// Marker line pointing at the failure.
    #[must_use]
    pub fn annotation(&self) -> String {
        annotate::annotate_offset(&self.input, self.offset)
    }

    /// Message, source text and marker line, one per line.
    #[must_use]
    pub fn report(&self) -> String {
        format!("{self}\n{}", annotate::render(&self.input, &self.location()))
    }
}

/// Tokenize a command source.
///
/// String sources run through the character automaton and yield tokens
/// covering every character. Vector sources yield one `StringLiteral`
/// per argument and never fail.
///
/// # Errors
///
/// Returns `LexError` on a character the automaton rejects, an escaping
/// backslash at end of input, or an unclosed quote.
#[tracing::instrument(level = "debug", skip_all)]
pub fn tokenize(source: &CommandSource) -> Result<Vec<Token>, LexError> {
    match source {
        CommandSource::String(input) => tokenize_string(source, input)
            .inspect_err(|err| debug!(%err, "rejected string source")),
        CommandSource::Vector(input) => Ok(tokenize_vector(source, input)),
    }
}

fn tokenize_string(source: &CommandSource, input: &StringSource) -> Result<Vec<Token>, LexError> {
    let text = input.as_str();
    let mut tokens = Vec::new();
    let mut state = State::Initial;
    let mut consumed = 0;

    for (index, (byte, ch)) in text.char_indices().enumerate() {
        let at = Cursor {
            char: index,
            byte,
            width: ch.len_utf8(),
        };
        let step = state
            .step(at, ch)
            .map_err(|kind| LexError::new(kind, source, text, index))?;
        for reduction in step.reductions() {
            tokens.push(reduction.into_token(source, text));
        }
        state = step.state;
        consumed = index + 1;
    }

    let last = state
        .finish()
        .map_err(|kind| LexError::new(kind, source, text, consumed))?;
    tokens.extend(last.map(|reduction| reduction.into_token(source, text)));

    debug!(chars = consumed, tokens = tokens.len(), "tokenized string source");
    Ok(tokens)
}

/// One token per argument, with spans laid out over the space-joined text.
pub(crate) fn tokenize_vector(source: &CommandSource, input: &VectorSource) -> Vec<Token> {
    let mut start = 0;
    let tokens: Vec<Token> = input
        .args()
        .iter()
        .map(|arg| {
            let width = arg.chars().count();
            // empty arguments get a zero-width span at their start
            let span = SourceLocation::new(
                source.clone(),
                SourceOffset::new(start),
                SourceOffset::new(start + width.saturating_sub(1)),
            );
            start += width + 1;
            Token {
                text: arg.clone(),
                kind: TokenKind::StringLiteral,
                span,
            }
        })
        .collect();

    debug!(tokens = tokens.len(), "tokenized vector source");
    tokens
}

/// Escapes only need a printable character to follow; space counts.
/// Any non-control character qualifies, non-ASCII included (format
/// characters such as U+200B too), not just printable ASCII.
fn is_graphic(ch: char) -> bool {
    !ch.is_control()
}

/// Position of one input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    char: usize,
    byte: usize,
    width: usize,
}

/// Characters claimed by a token, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    start: Cursor,
    end: Cursor,
}

impl Run {
    const fn at(cursor: Cursor) -> Self {
        Self {
            start: cursor,
            end: cursor,
        }
    }

    const fn extend(self, cursor: Cursor) -> Self {
        Self {
            start: self.start,
            end: cursor,
        }
    }
}

/// A closed token, not yet materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reduction {
    kind: TokenKind,
    run: Run,
}

impl Reduction {
    fn into_token(self, source: &CommandSource, text: &str) -> Token {
        let Run { start, end } = self.run;
        trace!(kind = ?self.kind, start = start.char, end = end.char, "reduced token");
        Token {
            text: text[start.byte..end.byte + end.width].to_string(),
            kind: self.kind,
            span: SourceLocation::new(
                source.clone(),
                SourceOffset::new(start.char),
                SourceOffset::new(end.char),
            ),
        }
    }
}

/// Automaton state. Every state but `Initial` carries the token being
/// accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    Whitespace(Run),
    Word(Run),
    WordBackslash(Run),
    Dquote(Run),
    DquoteBackslash(Run),
}

/// Outcome of feeding one character: the next state plus up to two
/// tokens closed by it, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    state: State,
    reduced: Option<Reduction>,
    emitted: Option<Reduction>,
}

impl Step {
    const fn to(state: State) -> Self {
        Self {
            state,
            reduced: None,
            emitted: None,
        }
    }

    /// Close the token that was pending before this character.
    const fn after(self, kind: TokenKind, run: Run) -> Self {
        Self {
            reduced: Some(Reduction { kind, run }),
            ..self
        }
    }

    /// Open and close a token on this character alone.
    const fn emit(self, kind: TokenKind, run: Run) -> Self {
        Self {
            emitted: Some(Reduction { kind, run }),
            ..self
        }
    }

    fn reductions(self) -> impl Iterator<Item = Reduction> {
        self.reduced.into_iter().chain(self.emitted)
    }
}

impl State {
    fn step(self, at: Cursor, ch: char) -> Result<Step, LexErrorKind> {
        match self {
            Self::Initial => Self::begin(at, ch),
            Self::Whitespace(run) if ch.is_whitespace() => {
                Ok(Step::to(Self::Whitespace(run.extend(at))))
            }
            Self::Whitespace(run) => Ok(Self::begin(at, ch)?.after(TokenKind::Whitespace, run)),
            Self::Word(run) => match ch {
                c if c.is_whitespace() => {
                    Ok(Step::to(Self::Whitespace(Run::at(at))).after(TokenKind::Word, run))
                }
                ';' | '|' => Ok(Step::to(Self::Initial)
                    .after(TokenKind::Word, run)
                    .emit(TokenKind::Special, Run::at(at))),
                '"' => Ok(Step::to(Self::Dquote(Run::at(at))).after(TokenKind::Word, run)),
                '\\' => Ok(Step::to(Self::WordBackslash(run.extend(at)))),
                c if is_graphic(c) => Ok(Step::to(Self::Word(run.extend(at)))),
                c => Err(LexErrorKind::InvalidCharacter(c)),
            },
            Self::WordBackslash(run) if is_graphic(ch) => Ok(Step::to(Self::Word(run.extend(at)))),
            Self::Dquote(run) => Ok(match ch {
                '"' => Step::to(Self::Initial).after(TokenKind::StringLiteral, run.extend(at)),
                '\\' => Step::to(Self::DquoteBackslash(run.extend(at))),
                _ => Step::to(Self::Dquote(run.extend(at))),
            }),
            Self::DquoteBackslash(run) if is_graphic(ch) => {
                Ok(Step::to(Self::Dquote(run.extend(at))))
            }
            Self::WordBackslash(_) | Self::DquoteBackslash(_) => {
                Err(LexErrorKind::InvalidCharacter(ch))
            }
        }
    }

    /// Transition out of `Initial` on `ch`.
    fn begin(at: Cursor, ch: char) -> Result<Step, LexErrorKind> {
        let run = Run::at(at);
        match ch {
            c if c.is_whitespace() => Ok(Step::to(Self::Whitespace(run))),
            ';' | '?' | '|' => Ok(Step::to(Self::Initial).emit(TokenKind::Special, run)),
            '"' => Ok(Step::to(Self::Dquote(run))),
            '\\' => Ok(Step::to(Self::WordBackslash(run))),
            c if is_graphic(c) => Ok(Step::to(Self::Word(run))),
            c => Err(LexErrorKind::InvalidCharacter(c)),
        }
    }

    /// Close whatever is pending at end of input.
    const fn finish(self) -> Result<Option<Reduction>, LexErrorKind> {
        match self {
            Self::Initial => Ok(None),
            Self::Whitespace(run) => Ok(Some(Reduction {
                kind: TokenKind::Whitespace,
                run,
            })),
            Self::Word(run) => Ok(Some(Reduction {
                kind: TokenKind::Word,
                run,
            })),
            Self::WordBackslash(_) => Err(LexErrorKind::EscapeAtEndOfInput),
            Self::Dquote(_) | Self::DquoteBackslash(_) => Err(LexErrorKind::UnclosedQuote),
        }
    }
}
