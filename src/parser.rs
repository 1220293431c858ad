use crate::entity::{InlineSpan, InlineText, SpanKind};
use crate::error::{Error, Result};

use log::trace;
use nom::{
    bytes::complete::{tag, take_till, take_until},
    combinator::verify,
    sequence::{preceded, terminated},
    IResult,
};

pub const BOLD_DELIMITER: &str = "**";
pub const ITALIC_DELIMITER: &str = "*";
pub const CODE_DELIMITER: &str = "`";

// bold must go before italic, images before links
pub fn parse_inline(text: &str) -> Result<InlineText> {
    let spans = vec![InlineSpan::PlainText(text.to_string())];
    let spans = split_delimiter(spans, BOLD_DELIMITER, InlineSpan::Bold)?;
    let spans = split_delimiter(spans, ITALIC_DELIMITER, InlineSpan::Italic)?;
    let spans = split_delimiter(spans, CODE_DELIMITER, InlineSpan::Code)?;
    let spans = split_bracketed(spans, SpanKind::Image)?;
    let spans = split_bracketed(spans, SpanKind::Link)?;
    trace!("inline {:?} -> {:?}", text, spans);
    Ok(spans)
}

pub fn split_delimiter(
    spans: InlineText,
    delimiter: &str,
    styled: fn(String) -> InlineSpan,
) -> Result<InlineText> {
    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            InlineSpan::PlainText(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };
        let sections: Vec<&str> = text.split(delimiter).collect();
        if sections.len() % 2 == 0 {
            return Err(Error::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text,
            });
        }
        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(InlineSpan::PlainText(section.to_string()));
            } else {
                result.push(styled(section.to_string()));
            }
        }
    }
    Ok(result)
}

pub fn split_bracketed(spans: InlineText, kind: SpanKind) -> Result<InlineText> {
    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            InlineSpan::PlainText(text) => extract_bracketed(&text, kind, &mut result)?,
            other => result.push(other),
        }
    }
    Ok(result)
}

fn extract_bracketed(text: &str, kind: SpanKind, result: &mut InlineText) -> Result<()> {
    let mut plain_from = 0;
    let mut pos = 0;
    while let Some(start) = find_opening(text, pos, kind) {
        let opened = match kind {
            SpanKind::Image => parse_image_opening(&text[start..]),
            SpanKind::Link => parse_link_opening(&text[start..]),
        };
        let (after_label, label) = match opened {
            Ok(found) => found,
            Err(_) => {
                pos = start + 1;
                continue;
            }
        };
        let (rest, url) = parse_url(after_label).map_err(|_| Error::UnterminatedSpan {
            kind,
            text: text.to_string(),
        })?;
        if start > plain_from {
            result.push(InlineSpan::PlainText(text[plain_from..start].to_string()));
        }
        result.push(match kind {
            SpanKind::Image => InlineSpan::Image(label.to_string(), url.to_string()),
            SpanKind::Link => InlineSpan::Link(label.to_string(), url.to_string()),
        });
        plain_from = text.len() - rest.len();
        pos = plain_from;
    }
    if plain_from < text.len() {
        result.push(InlineSpan::PlainText(text[plain_from..].to_string()));
    }
    Ok(())
}

// A link opening is a `[` not directly preceded by `!`.
fn find_opening(text: &str, from: usize, kind: SpanKind) -> Option<usize> {
    match kind {
        SpanKind::Image => text[from..].find("![").map(|i| from + i),
        SpanKind::Link => text[from..]
            .match_indices('[')
            .map(|(i, _)| from + i)
            .find(|&i| !text[..i].ends_with('!')),
    }
}

// the label runs up to the first `](` on the same line
fn parse_label(i: &str) -> IResult<&str, &str> {
    terminated(
        verify(take_until("]("), |s: &str| !s.contains('\n')),
        tag("]("),
    )(i)
}

fn parse_image_opening(i: &str) -> IResult<&str, &str> {
    preceded(tag("!["), parse_label)(i)
}

fn parse_link_opening(i: &str) -> IResult<&str, &str> {
    preceded(tag("["), parse_label)(i)
}

fn parse_url(i: &str) -> IResult<&str, &str> {
    terminated(take_till(|c| c == ')' || c == '\n'), tag(")"))(i)
}
