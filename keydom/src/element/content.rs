use crate::attrs::Attrs;
use crate::tag::Tag;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Element {
        tag: Tag,
        attrs: Attrs,
        children: Vec<super::Node>,
    },
    /// An ordered list of nodes with no element of its own.
    Fragment(Vec<super::Node>),
}
