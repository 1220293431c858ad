//! Markdown to HTML: `segment` -> `classify` -> `parse_inline` -> `build` -> `render`.

pub mod block;
pub mod entity;
pub mod error;
pub mod node;
pub mod page;
pub mod parser;
pub mod render;
pub mod translator;

pub use block::{classify, segment};
pub use entity::{BlockKind, InlineSpan, InlineText, SpanKind};
pub use error::{Error, Result};
pub use node::{Attributes, LeafNode, MarkupNode, ParentNode};
pub use page::{generate_page, generate_page_with, markdown_to_html, markdown_to_html_with};
pub use parser::parse_inline;
pub use render::{render, Renderer};
pub use translator::{build, extract_title};
