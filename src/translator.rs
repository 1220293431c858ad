use crate::block::{
    classify, parse_ordered_marker, parse_unordered_marker, segment, CODE_FENCE,
};
use crate::entity::{BlockKind, InlineSpan, InlineText};
use crate::error::{Error, Result};
use crate::node::{LeafNode, MarkupNode, ParentNode};
use crate::parser::parse_inline;

use log::debug;

pub const ROOT_TAG: &str = "div";
pub const TITLE_MARKER: &str = "# ";

pub fn build(document: &str) -> Result<MarkupNode> {
    let mut children = Vec::new();
    for block in segment(document) {
        let kind = classify(&block);
        debug!("{:?} block: {:?}", kind, block);
        children.push(translate_block(&block, kind)?);
    }
    if children.is_empty() {
        return Err(Error::EmptyDocument);
    }
    Ok(ParentNode::new(Some(ROOT_TAG), children)?.into())
}

pub fn translate_block(block: &str, kind: BlockKind) -> Result<MarkupNode> {
    match kind {
        BlockKind::Heading(_) => translate_heading(block),
        BlockKind::Code => translate_code(block),
        BlockKind::Quote => translate_quote(block),
        BlockKind::UnorderedList => translate_list(block, "ul", |line| {
            parse_unordered_marker(line).map_or(line, |(rest, _)| rest)
        }),
        BlockKind::OrderedList => translate_list(block, "ol", |line| {
            parse_ordered_marker(line).map_or(line, |(rest, _)| rest)
        }),
        BlockKind::Paragraph => wrap_inline("p", parse_inline(block.trim())?),
    }
}

// heading text is taken literally, without inline parsing
fn translate_heading(block: &str) -> Result<MarkupNode> {
    let marker = block.split(' ').next().unwrap_or_default();
    let level = marker.chars().filter(|&c| c == '#').count();
    if !(1..=6).contains(&level) {
        return Err(Error::InvalidHeadingLevel(level));
    }
    let text = block[marker.len()..].trim();
    Ok(LeafNode::tagged(&format!("h{}", level), text).into())
}

fn translate_code(block: &str) -> Result<MarkupNode> {
    let interior = block
        .strip_prefix(CODE_FENCE)
        .and_then(|rest| rest.strip_suffix(CODE_FENCE))
        .unwrap_or_default();
    let interior = interior.strip_prefix('\n').unwrap_or(interior);
    let interior = interior.strip_suffix('\n').unwrap_or(interior);
    let code = LeafNode::tagged("code", interior);
    Ok(ParentNode::new(Some("pre"), vec![code.into()])?.into())
}

// all quoted lines flatten into one run of children
fn translate_quote(block: &str) -> Result<MarkupNode> {
    let mut spans = Vec::new();
    for line in block.split('\n') {
        let line = line.trim_start_matches(|c: char| c == '>' || c.is_whitespace());
        spans.extend(parse_inline(line.trim())?);
    }
    wrap_inline("blockquote", spans)
}

fn translate_list(block: &str, tag: &str, strip_marker: fn(&str) -> &str) -> Result<MarkupNode> {
    let items = block
        .split('\n')
        .map(|line| wrap_inline("li", parse_inline(strip_marker(line).trim())?))
        .collect::<Result<Vec<_>>>()?;
    Ok(ParentNode::new(Some(tag), items)?.into())
}

fn wrap_inline(tag: &str, spans: InlineText) -> Result<MarkupNode> {
    let children = spans
        .into_iter()
        .map(|span| MarkupNode::from(span_to_leaf(span)))
        .collect();
    Ok(ParentNode::new(Some(tag), children)?.into())
}

pub fn span_to_leaf(span: InlineSpan) -> LeafNode {
    match span {
        InlineSpan::PlainText(text) => LeafNode::text(&text),
        InlineSpan::Bold(text) => LeafNode::tagged("b", &text),
        InlineSpan::Italic(text) => LeafNode::tagged("i", &text),
        InlineSpan::Code(text) => LeafNode::tagged("code", &text),
        InlineSpan::Link(text, url) => LeafNode::tagged("a", &text).with_attribute("href", &url),
        InlineSpan::Image(alt, url) => LeafNode::tagged("img", "")
            .with_attribute("src", &url)
            .with_attribute("alt", &alt),
    }
}

/// Returns the trimmed text of the first `# ` line in the document.
pub fn extract_title(document: &str) -> Result<String> {
    document
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_MARKER))
        .map(|title| title.trim().to_string())
        .ok_or(Error::NoTitleFound)
}
