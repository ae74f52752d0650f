mod content;
mod node;

pub use content::Content;
pub use node::Node;

use crate::key::Key;

/// Find a direct child by its identity.
///
/// Children without an explicit key are matched by position, the same way
/// reconciliation identifies them.
pub fn find_child<'a>(parent: &'a Node, key: &Key) -> Option<&'a Node> {
    parent
        .child_nodes()
        .iter()
        .enumerate()
        .find(|(i, child)| child.identity(*i) == *key)
        .map(|(_, child)| child)
}
