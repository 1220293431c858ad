use crate::error::{Error, Result};

// rendered in insertion order
pub type Attributes = Vec<(String, String)>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkupNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl MarkupNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            MarkupNode::Leaf(leaf) => leaf.tag(),
            MarkupNode::Parent(parent) => Some(parent.tag()),
        }
    }
}

impl From<LeafNode> for MarkupNode {
    fn from(leaf: LeafNode) -> Self {
        MarkupNode::Leaf(leaf)
    }
}

impl From<ParentNode> for MarkupNode {
    fn from(parent: ParentNode) -> Self {
        MarkupNode::Parent(parent)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
}

impl LeafNode {
    /// An empty value is fine, a missing one is not.
    pub fn new(tag: Option<&str>, value: Option<&str>) -> Result<Self> {
        let value = value.ok_or(Error::MissingValue)?;
        Ok(LeafNode {
            tag: tag.map(str::to_string),
            value: value.to_string(),
            attributes: Attributes::new(),
        })
    }

    pub fn text(value: &str) -> Self {
        LeafNode {
            tag: None,
            value: value.to_string(),
            attributes: Attributes::new(),
        }
    }

    pub fn tagged(tag: &str, value: &str) -> Self {
        LeafNode {
            tag: Some(tag.to_string()),
            value: value.to_string(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<MarkupNode>,
    attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: Option<&str>, children: Vec<MarkupNode>) -> Result<Self> {
        let tag = tag.ok_or(Error::MissingTag)?;
        if children.is_empty() {
            return Err(Error::MissingChildren {
                tag: tag.to_string(),
            });
        }
        Ok(ParentNode {
            tag: tag.to_string(),
            children,
            attributes: Attributes::new(),
        })
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[MarkupNode] {
        &self.children
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}
