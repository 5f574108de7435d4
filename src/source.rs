use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Raw command text as typed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringSource(Arc<str>);

impl StringSource {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Pre-split argument vector, e.g. process arguments or the words
/// handed over by a shell completion hook.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VectorSource(Arc<[String]>);

impl VectorSource {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(args.into_iter().map(Into::into).collect())
    }

    /// Process arguments without the program name.
    #[must_use]
    pub fn from_env_args() -> Self {
        Self::new(std::env::args().skip(1))
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.0
    }

    /// Arguments joined with single spaces.
    ///
    /// Arguments are not quoted or escaped, so the result does not
    /// necessarily tokenize back to the same arguments. Computed on
    /// every call.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }
}

/// Where a command's text came from.
///
/// Cloning is cheap: clones share the underlying text, which is how
/// tokens and locations keep a reference to their source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommandSource {
    String(StringSource),
    Vector(VectorSource),
}

impl CommandSource {
    pub fn from_string(text: impl Into<Arc<str>>) -> Self {
        Self::String(StringSource::new(text))
    }

    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Vector(VectorSource::new(args))
    }

    /// Full text of the source. Borrowed for string sources, joined on
    /// demand for vector sources.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::String(s) => Cow::Borrowed(s.as_str()),
            Self::Vector(v) => Cow::Owned(v.joined()),
        }
    }
}

impl From<StringSource> for CommandSource {
    fn from(source: StringSource) -> Self {
        Self::String(source)
    }
}

impl From<VectorSource> for CommandSource {
    fn from(source: VectorSource) -> Self {
        Self::Vector(source)
    }
}

impl fmt::Display for CommandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Full text of `source` as a string.
#[must_use]
pub fn source_text(source: &CommandSource) -> String {
    source.text().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_text_is_borrowed() {
        let source = CommandSource::from_string("show version");
        assert!(matches!(source.text(), Cow::Borrowed("show version")));
    }

    #[test]
    fn vector_text_joins_with_single_spaces() {
        let source = CommandSource::from_args(["set", "name", "two words"]);
        assert_eq!(source_text(&source), "set name two words");
    }

    #[test]
    fn empty_vector_has_empty_text() {
        let source = CommandSource::from_args(Vec::<String>::new());
        assert_eq!(source_text(&source), "");
    }

    #[test]
    fn clones_share_text() {
        let source = StringSource::new("abc");
        let clone = source.clone();
        assert!(std::ptr::eq(source.as_str(), clone.as_str()));
    }

    #[test]
    fn env_args_skip_program_name() {
        let expected: Vec<String> = std::env::args().skip(1).collect();
        let source = VectorSource::from_env_args();
        assert_eq!(source.args(), expected.as_slice());
        assert_eq!(source.args().len(), std::env::args().count() - 1);
    }
}
