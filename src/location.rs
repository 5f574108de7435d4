//! Positions and spans within a [`CommandSource`].
//!
//! Offsets are flat character indices into the source's full text
//! (the joined text for vector sources). Spans are inclusive at both
//! ends; a zero-width span has `start == end`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::source::CommandSource;

/// A single position in a source.
///
/// Only `char` is populated by the tokenizers; `line` and `column`
/// are always zero. Equality, ordering and hashing use `char` alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceOffset {
    pub char: usize,
    pub line: usize,
    pub column: usize,
}

impl SourceOffset {
    #[must_use]
    pub const fn new(char: usize) -> Self {
        Self {
            char,
            line: 0,
            column: 0,
        }
    }
}

impl PartialEq for SourceOffset {
    fn eq(&self, other: &Self) -> bool {
        self.char == other.char
    }
}

impl Eq for SourceOffset {}

impl PartialOrd for SourceOffset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SourceOffset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.char.cmp(&other.char)
    }
}

impl Hash for SourceOffset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.char.hash(state);
    }
}

impl From<usize> for SourceOffset {
    fn from(char: usize) -> Self {
        Self::new(char)
    }
}

impl fmt::Display for SourceOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char)
    }
}

/// An inclusive character span tied to the source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    source: CommandSource,
    start: SourceOffset,
    end: SourceOffset,
}

impl SourceLocation {
    /// Span from `start` to `end` inclusive. The bounds are swapped if
    /// given in the wrong order.
    #[must_use]
    pub fn new(source: CommandSource, start: SourceOffset, end: SourceOffset) -> Self {
        let (start, end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        Self { source, start, end }
    }

    /// Zero-width span at `offset`.
    #[must_use]
    pub const fn at(source: CommandSource, offset: SourceOffset) -> Self {
        Self {
            source,
            start: offset,
            end: offset,
        }
    }

    #[must_use]
    pub const fn source(&self) -> &CommandSource {
        &self.source
    }

    #[must_use]
    pub const fn start(&self) -> SourceOffset {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> SourceOffset {
        self.end
    }

    /// Number of character positions covered (at least one). Saturates
    /// at `usize::MAX`.
    #[must_use]
    pub const fn width(&self) -> usize {
        (self.end.char - self.start.char).saturating_add(1)
    }

    #[must_use]
    pub const fn is_zero_width(&self) -> bool {
        self.start.char == self.end.char
    }

    /// Whether `point` lies within the span.
    #[must_use]
    pub const fn contains_offset(&self, point: SourceOffset) -> bool {
        point.char >= self.start.char && point.char <= self.end.char
    }

    /// Whether `inner` lies entirely within the span.
    #[must_use]
    pub const fn contains(&self, inner: &Self) -> bool {
        inner.start.char >= self.start.char && inner.end.char <= self.end.char
    }

    /// Like [`contains_offset`](Self::contains_offset), but also true
    /// for a cursor sitting right after the last character.
    #[must_use]
    pub const fn contains_for_completion(&self, point: SourceOffset) -> bool {
        point.char >= self.start.char && point.char <= self.end.char.saturating_add(1)
    }

    /// Smallest span covering both `self` and `other`, in `self`'s source.
    #[must_use]
    pub fn to(&self, other: &Self) -> Self {
        Self {
            source: self.source.clone(),
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
