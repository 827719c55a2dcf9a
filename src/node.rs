//! # Generic XML Node Tree
//!
//! The output of the renderer is not XML text but a tree of tagged nodes that a
//! generic tree-to-XML serializer turns into text. Each node has a tag name,
//! optional attributes and content that is either text, a single child node or
//! an ordered list of child nodes.
//!
//! ## Serialized Shape
//! `XmlNode` serializes to the object shape used by generic JSON-to-XML
//! serializers:
//!
//! ```text
//! { "_name": "kind", "_attrs": { "text": "mi7" }, "_content": "minor-seventh" }
//! { "_name": "root", "_content": [ { "_name": "root-step", "_content": "C" } ] }
//! ```
//!
//! `_attrs` is omitted when there are none, `_content` when the node is empty.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(untagged)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Node(Box<XmlNode>),
    Nodes(Vec<XmlNode>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attrs: BTreeMap<String, String>,
    content: Content,
}

impl XmlNode {
    pub fn new(name: impl Into<String>, content: Content) -> Self {
        Self {
            name: name.into(),
            attrs: BTreeMap::new(),
            content,
        }
    }

    /// `<name>text</name>`
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, Content::Text(text.into()))
    }

    /// `<name>children...</name>`
    pub fn parent(name: impl Into<String>, children: Vec<XmlNode>) -> Self {
        Self::new(name, Content::Nodes(children))
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Text content, if this is a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Child nodes in document order (empty for text and empty nodes).
    pub fn children(&self) -> &[XmlNode] {
        match &self.content {
            Content::Node(node) => std::slice::from_ref(node.as_ref()),
            Content::Nodes(nodes) => nodes,
            Content::Empty | Content::Text(_) => &[],
        }
    }

    /// First child with the given tag.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children().iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children().iter().filter(move |c| c.name == name)
    }
}

impl Serialize for XmlNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut len = 1;
        if !self.attrs.is_empty() {
            len += 1;
        }
        if self.content != Content::Empty {
            len += 1;
        }

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("_name", &self.name)?;
        if !self.attrs.is_empty() {
            map.serialize_entry("_attrs", &self.attrs)?;
        }
        if self.content != Content::Empty {
            map.serialize_entry("_content", &self.content)?;
        }
        map.end()
    }
}
