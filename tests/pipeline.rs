use pretty_assertions::assert_eq;
use rstest::rstest;

use prose::{
    build, classify, extract_title, parse_inline, render, segment, BlockKind, Error, InlineSpan,
    LeafNode, MarkupNode, ParentNode,
};

fn parent(tag: &str, children: Vec<MarkupNode>) -> MarkupNode {
    ParentNode::new(Some(tag), children).unwrap().into()
}

#[rstest]
#[case("# Heading", "<div><h1>Heading</h1></div>")]
#[case("###### Small", "<div><h6>Small</h6></div>")]
#[case("```\ncode line 1\ncode line 2\n```", "<div><pre><code>code line 1\ncode line 2</code></pre></div>")]
#[case("This is **bold** text", "<div><p>This is <b>bold</b> text</p></div>")]
#[case("* Item 1\n* Item 2", "<div><ul><li>Item 1</li><li>Item 2</li></ul></div>")]
#[case("- `a`\n- b", "<div><ul><li><code>a</code></li><li>b</li></ul></div>")]
#[case("1. one\n2. two\n3. three", "<div><ol><li>one</li><li>two</li><li>three</li></ol></div>")]
#[case("> a *quote*", "<div><blockquote>a <i>quote</i></blockquote></div>")]
fn renders_documents(#[case] markdown: &str, #[case] html: &str) {
    assert_eq!(render(&build(markdown).unwrap()), html);
}

#[test]
fn paragraph_tree_shape() {
    assert_eq!(
        build("This is **bold** text").unwrap(),
        parent(
            "div",
            vec![parent(
                "p",
                vec![
                    LeafNode::text("This is ").into(),
                    LeafNode::tagged("b", "bold").into(),
                    LeafNode::text(" text").into(),
                ]
            )]
        )
    );
}

#[test]
fn list_items_wrap_one_leaf_each() {
    assert_eq!(
        build("* Item 1\n* Item 2").unwrap(),
        parent(
            "div",
            vec![parent(
                "ul",
                vec![
                    parent("li", vec![LeafNode::text("Item 1").into()]),
                    parent("li", vec![LeafNode::text("Item 2").into()]),
                ]
            )]
        )
    );
}

#[test]
fn image_is_never_read_as_link() {
    assert_eq!(
        parse_inline("[a](x) ![b](y) [c](z)").unwrap(),
        vec![
            InlineSpan::Link(String::from("a"), String::from("x")),
            InlineSpan::PlainText(String::from(" ")),
            InlineSpan::Image(String::from("b"), String::from("y")),
            InlineSpan::PlainText(String::from(" ")),
            InlineSpan::Link(String::from("c"), String::from("z")),
        ]
    );
}

#[test]
fn ordered_list_numbering() {
    assert_eq!(classify("2. a\n3. b"), BlockKind::Paragraph);
    assert_eq!(classify("1. a\n2. b"), BlockKind::OrderedList);
}

#[test]
fn every_block_gets_a_kind() {
    let document = "# t\n\n```\nx\n```\n\n> q\n\n- u\n\n1. o\n\ntext\n\n*stray";
    let kinds: Vec<BlockKind> = segment(document).iter().map(|b| classify(b)).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Heading(1),
            BlockKind::Code,
            BlockKind::Quote,
            BlockKind::UnorderedList,
            BlockKind::OrderedList,
            BlockKind::Paragraph,
            BlockKind::Paragraph,
        ]
    );
}

#[test]
fn failures_abort_the_document() {
    assert!(matches!(
        build("# fine\n\nInvalid *italic syntax"),
        Err(Error::UnmatchedDelimiter { .. })
    ));
    assert_eq!(build("   \n\n\n"), Err(Error::EmptyDocument));
    assert_eq!(extract_title("## no h1\n\ntext"), Err(Error::NoTitleFound));
}

#[test]
fn error_messages_name_the_input() {
    let err = parse_inline("Invalid *italic syntax").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unmatched delimiter '*' in text: 'Invalid *italic syntax'"
    );
}
