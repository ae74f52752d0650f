//! Keyed list rendering for `keydom` trees.
//!
//! [`For`] maps a slice into identified nodes, with optional loading and
//! empty states and an optional wrapper element.

mod for_list;

pub use for_list::{for_each, For};

pub mod prelude {
    pub use crate::{for_each, For};
    pub use keydom::{Attrs, Key, Node, Tag, Wrapper};
}
