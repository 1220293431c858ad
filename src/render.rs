use crate::node::MarkupNode;

/// Serializes markup trees to HTML text.
///
/// Leaf values are written as-is. Attribute values are written as-is too
/// unless `escape_attributes` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Renderer {
    pub escape_attributes: bool,
}

impl Renderer {
    pub fn new(escape_attributes: bool) -> Self {
        Renderer { escape_attributes }
    }

    pub fn render(&self, node: &MarkupNode) -> String {
        let mut html = String::new();
        self.write_node(node, &mut html);
        html
    }

    fn write_node(&self, node: &MarkupNode, html: &mut String) {
        match node {
            MarkupNode::Leaf(leaf) => match leaf.tag() {
                None => html.push_str(leaf.value()),
                Some(tag) => {
                    self.write_open(tag, leaf.attributes(), html);
                    html.push_str(leaf.value());
                    write_close(tag, html);
                }
            },
            MarkupNode::Parent(parent) => {
                self.write_open(parent.tag(), parent.attributes(), html);
                for child in parent.children() {
                    self.write_node(child, html);
                }
                write_close(parent.tag(), html);
            }
        }
    }

    fn write_open(&self, tag: &str, attributes: &[(String, String)], html: &mut String) {
        html.push('<');
        html.push_str(tag);
        html.push_str(&self.attributes_to_html(attributes));
        html.push('>');
    }

    /// ` name="value"` for each attribute, in order.
    pub fn attributes_to_html(&self, attributes: &[(String, String)]) -> String {
        attributes
            .iter()
            .map(|(name, value)| {
                if self.escape_attributes {
                    format!(
                        " {}=\"{}\"",
                        name,
                        html_escape::encode_double_quoted_attribute(value)
                    )
                } else {
                    format!(" {}=\"{}\"", name, value)
                }
            })
            .collect()
    }
}

fn write_close(tag: &str, html: &mut String) {
    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}

pub fn render(node: &MarkupNode) -> String {
    Renderer::default().render(node)
}
