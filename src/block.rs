use crate::entity::BlockKind;

use log::debug;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, digit1},
    combinator::map,
    sequence::terminated,
    IResult,
};

pub const CODE_FENCE: &str = "```";

pub fn segment(document: &str) -> Vec<String> {
    let blocks: Vec<String> = split_on_blank_lines(document)
        .into_iter()
        .map(|piece| collapse_indentation(piece).trim().to_string())
        .filter(|block| !block.is_empty())
        .collect();
    debug!("segmented document into {} blocks", blocks.len());
    blocks
}

fn split_on_blank_lines(document: &str) -> Vec<&str> {
    let bytes = document.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\n' {
            i += 1;
            continue;
        }
        let run = bytes[i..].iter().take_while(|&&b| b == b'\n').count();
        if run >= 2 {
            pieces.push(&document[start..i]);
            start = i + run;
        }
        i += run;
    }
    pieces.push(&document[start..]);
    pieces
}

fn collapse_indentation(piece: &str) -> String {
    let mut collapsed = String::with_capacity(piece.len());
    let mut chars = piece.chars().peekable();
    while let Some(c) = chars.next() {
        collapsed.push(c);
        if c == '\n' {
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
        }
    }
    collapsed
}

// first matching rule wins
pub fn classify(block: &str) -> BlockKind {
    if let Ok((_, level)) = parse_heading_marker(block) {
        return BlockKind::Heading(level);
    }
    if is_fenced_code(block) {
        return BlockKind::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if lines.iter().all(|line| line.trim_start().starts_with('>')) {
        return BlockKind::Quote;
    }
    if lines.iter().all(|line| parse_unordered_marker(line).is_ok()) {
        return BlockKind::UnorderedList;
    }
    if lines.iter().all(|line| parse_ordered_marker(line).is_ok()) {
        // numbering must read 1, 2, 3, ... or the block is a paragraph
        let contiguous = lines.iter().enumerate().all(|(i, line)| {
            parse_ordered_marker(line)
                .ok()
                .and_then(|(_, number)| number.parse::<usize>().ok())
                == Some(i + 1)
        });
        if contiguous {
            return BlockKind::OrderedList;
        }
    }
    BlockKind::Paragraph
}

fn is_fenced_code(block: &str) -> bool {
    block.len() >= 2 * CODE_FENCE.len()
        && block.starts_with(CODE_FENCE)
        && block.ends_with(CODE_FENCE)
}

// `#` to `######` followed by a space
pub(crate) fn parse_heading_marker(i: &str) -> IResult<&str, usize> {
    map(
        terminated(take_while_m_n(1, 6, |c| c == '#'), char(' ')),
        |s: &str| s.len(),
    )(i)
}

pub(crate) fn parse_unordered_marker(i: &str) -> IResult<&str, &str> {
    alt((tag("* "), tag("- ")))(i)
}

pub(crate) fn parse_ordered_marker(i: &str) -> IResult<&str, &str> {
    terminated(digit1, tag(". "))(i)
}
