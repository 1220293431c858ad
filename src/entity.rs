use std::fmt;

pub type InlineText = Vec<InlineSpan>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InlineSpan {
    PlainText(String),
    Bold(String),
    Italic(String),
    Code(String),
    /// `(alt, url)`
    Image(String, String),
    /// `(text, url)`
    Link(String, String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Heading(usize),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Bracketed inline constructs that can be left open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanKind {
    Image,
    Link,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanKind::Image => f.write_str("image"),
            SpanKind::Link => f.write_str("link"),
        }
    }
}
