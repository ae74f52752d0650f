use super::Content;
use crate::attrs::Attrs;
use crate::key::Key;
use crate::tag::Tag;

/// A node in the view tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    // Identity among siblings. `None` means positional.
    pub key: Option<Key>,
    pub content: Content,
}

impl Node {
    pub const fn empty() -> Self {
        Self {
            key: None,
            content: Content::Empty,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            key: None,
            content: Content::Text(content.into()),
        }
    }

    pub fn element(tag: Tag) -> Self {
        Self {
            key: None,
            content: Content::Element {
                tag,
                attrs: Attrs::default(),
                children: Vec::new(),
            },
        }
    }

    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            key: None,
            content: Content::Fragment(children.into_iter().collect()),
        }
    }

    /// Give `node` an identity without touching its own key.
    ///
    /// The node is placed inside a single-child fragment carrying `key`, so a
    /// caller's node may keep whatever key it already had.
    pub fn keyed(key: impl Into<Key>, node: Node) -> Self {
        Self {
            key: Some(key.into()),
            content: Content::Fragment(vec![node]),
        }
    }

    // Identity
    pub fn key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Identity of this node when it sits at `position` among its siblings.
    pub fn identity(&self, position: usize) -> Key {
        self.key.clone().unwrap_or(Key::Index(position))
    }

    // Attributes (elements only; ignored for other content)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Content::Element { attrs, .. } = &mut self.content {
            attrs.insert(name, value);
        }
        self
    }

    pub fn attrs(mut self, new_attrs: Attrs) -> Self {
        if let Content::Element { attrs, .. } = &mut self.content {
            for (name, value) in new_attrs.iter() {
                attrs.insert(name, value);
            }
        }
        self
    }

    // Children
    pub fn child(mut self, child: Node) -> Self {
        match &mut self.content {
            Content::Element { children, .. } | Content::Fragment(children) => {
                children.push(child)
            }
            Content::Empty => self.content = Content::Fragment(vec![child]),
            Content::Text(text) => {
                // Text becomes the first child
                let text = std::mem::take(text);
                self.content = Content::Fragment(vec![Node::text(text), child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Node>) -> Self {
        match &mut self.content {
            Content::Element { children, .. } | Content::Fragment(children) => {
                children.extend(new_children)
            }
            Content::Empty => {
                self.content = Content::Fragment(new_children.into_iter().collect());
            }
            Content::Text(text) => {
                let text = Node::text(std::mem::take(text));
                self.content =
                    Content::Fragment(std::iter::once(text).chain(new_children).collect());
            }
        }
        self
    }

    // Inspection
    pub fn child_nodes(&self) -> &[Node] {
        match &self.content {
            Content::Element { children, .. } | Content::Fragment(children) => children,
            Content::Empty | Content::Text(_) => &[],
        }
    }

    pub fn tag(&self) -> Option<&Tag> {
        match &self.content {
            Content::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn get_attrs(&self) -> Option<&Attrs> {
        match &self.content {
            Content::Element { attrs, .. } => Some(attrs),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.content, Content::Empty)
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self.content, Content::Fragment(_))
    }

    /// Text of this node and all descendants, concatenated in tree order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::Text(s) => out.push_str(s),
            Content::Element { children, .. } | Content::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Content::Empty => {}
        }
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}
