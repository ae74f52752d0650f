pub mod attrs;
pub mod element;
pub mod key;
pub mod markup;
pub mod reconcile;
pub mod tag;

pub use attrs::Attrs;
pub use element::{Content, Node};
pub use key::Key;
pub use reconcile::{Change, KeyedIndex};
pub use tag::{Tag, TagError, Wrapper};
