//! Element types and the wrapper seam.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::attrs::Attrs;
use crate::element::Node;

/// Error returned when parsing an element tag name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("tag name is empty")]
    Empty,
    #[error("tag name must start with a letter: {0:?}")]
    BadStart(String),
    #[error("invalid character {ch:?} in tag name {name:?}")]
    BadChar { name: String, ch: char },
}

/// Intrinsic element type, e.g. `div`, `ul` or `li`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    /// Build a tag from a literal. Literals are trusted; use `parse` for input.
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub const DIV: Tag = Tag::new("div");
    pub const UL: Tag = Tag::new("ul");
    pub const OL: Tag = Tag::new("ol");
    pub const LI: Tag = Tag::new("li");
    pub const SPAN: Tag = Tag::new("span");
}

impl Default for Tag {
    fn default() -> Self {
        Self::DIV
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(TagError::Empty)?;
        if !first.is_ascii_alphabetic() {
            return Err(TagError::BadStart(s.to_string()));
        }
        if let Some(ch) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '-')) {
            return Err(TagError::BadChar {
                name: s.to_string(),
                ch,
            });
        }
        Ok(Self(Cow::Owned(s.to_string())))
    }
}

/// Something that can group a sequence of nodes under a single node.
///
/// Implemented for [`Tag`] (an intrinsic element) and for closures taking
/// `(Attrs, Vec<Node>)`, which act as user-defined components. The attribute
/// bag a wrapper receives never carries the children slot.
pub trait Wrapper {
    fn wrap(&self, attrs: Attrs, children: Vec<Node>) -> Node;
}

impl Wrapper for Tag {
    fn wrap(&self, attrs: Attrs, children: Vec<Node>) -> Node {
        Node::element(self.clone()).attrs(attrs).children(children)
    }
}

impl<F> Wrapper for F
where
    F: Fn(Attrs, Vec<Node>) -> Node,
{
    fn wrap(&self, attrs: Attrs, children: Vec<Node>) -> Node {
        self(attrs, children)
    }
}
