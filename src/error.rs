use thiserror::Error;

use crate::entity::SpanKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unmatched delimiter '{delimiter}' in text: '{text}'")]
    UnmatchedDelimiter { delimiter: String, text: String },

    #[error("{kind} opened but never closed in text: '{text}'")]
    UnterminatedSpan { kind: SpanKind, text: String },

    #[error("leaf node has no value")]
    MissingValue,

    #[error("parent node has no tag")]
    MissingTag,

    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },

    #[error("heading level {0} is outside 1..=6")]
    InvalidHeadingLevel(usize),

    #[error("document contains no renderable blocks")]
    EmptyDocument,

    #[error("no level-1 heading found")]
    NoTitleFound,
}
