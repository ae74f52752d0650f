//! The `For` component.
//!
//! # Example
//!
//! ```ignore
//! use forlist::prelude::*;
//!
//! struct Todo {
//!     id: i64,
//!     title: String,
//! }
//!
//! let node = For::new(&todos, |todo: &Todo, _, _| Node::element(Tag::LI).child(Node::text(&todo.title)))
//!     .key_by(|todo, _| todo.id.into())
//!     .empty(|| Node::text("Nothing to do"))
//!     .loading(|| Node::text("Loading..."))
//!     .is_loading(fetching)
//!     .wrap(Tag::UL)
//!     .wrapper_props(Attrs::new().set("class", "todos"))
//!     .render();
//! ```

use keydom::{Attrs, Key, Node, Tag, Wrapper};

type RenderFn<'a, T> = Box<dyn Fn(&T, usize, &[T]) -> Node + 'a>;
type KeyFn<'a, T> = Box<dyn Fn(&T, usize) -> Key + 'a>;
type ProduceFn<'a> = Box<dyn Fn() -> Node + 'a>;

/// Render each item of a slice, like `Iterator::map` with identities.
///
/// Exactly one of three outputs is produced per [`render`](For::render),
/// checked in this order:
///
/// 1. `is_loading` is set and a loading producer exists: the loading node.
/// 2. The slice is empty and an empty producer exists: the empty node.
/// 3. Otherwise one keyed node per item, in slice order, grouped by the
///    wrapper if there is one, or returned as a fragment.
///
/// Neither the loading flag nor an empty slice short-circuits on its own;
/// without the matching producer rendering falls through to step 3. Keys
/// are not checked for uniqueness here; the host decides what duplicates
/// mean.
pub struct For<'a, T, W = Tag> {
    each: &'a [T],
    children: RenderFn<'a, T>,
    get_key: Option<KeyFn<'a, T>>,
    empty: Option<ProduceFn<'a>>,
    loading: Option<ProduceFn<'a>>,
    is_loading: bool,
    wrapper: Option<W>,
    wrapper_props: Attrs,
}

impl<'a, T> For<'a, T> {
    pub fn new(each: &'a [T], children: impl Fn(&T, usize, &[T]) -> Node + 'a) -> Self {
        Self {
            each,
            children: Box::new(children),
            get_key: None,
            empty: None,
            loading: None,
            is_loading: false,
            wrapper: None,
            wrapper_props: Attrs::default(),
        }
    }
}

impl<'a, T, W: Wrapper> For<'a, T, W> {
    /// Derive each item's identity instead of using its position.
    pub fn key_by(mut self, get_key: impl Fn(&T, usize) -> Key + 'a) -> Self {
        self.get_key = Some(Box::new(get_key));
        self
    }

    pub fn empty(mut self, empty: impl Fn() -> Node + 'a) -> Self {
        self.empty = Some(Box::new(empty));
        self
    }

    pub fn loading(mut self, loading: impl Fn() -> Node + 'a) -> Self {
        self.loading = Some(Box::new(loading));
        self
    }

    pub fn is_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Group the rendered items under `wrapper`.
    ///
    /// Any wrapper props set so far are kept.
    pub fn wrap<V: Wrapper>(self, wrapper: V) -> For<'a, T, V> {
        For {
            each: self.each,
            children: self.children,
            get_key: self.get_key,
            empty: self.empty,
            loading: self.loading,
            is_loading: self.is_loading,
            wrapper: Some(wrapper),
            wrapper_props: self.wrapper_props,
        }
    }

    /// Attributes for the wrapper. A `children` entry is dropped.
    pub fn wrapper_props(mut self, props: Attrs) -> Self {
        self.wrapper_props = props;
        self
    }

    pub fn render(&self) -> Node {
        if self.is_loading {
            if let Some(loading) = &self.loading {
                log::trace!("For: loading state ({} items ignored)", self.each.len());
                return loading();
            }
        }

        if self.each.is_empty() {
            if let Some(empty) = &self.empty {
                log::trace!("For: empty state");
                return empty();
            }
        }

        let items: Vec<Node> = self
            .each
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let key = match &self.get_key {
                    Some(get_key) => get_key(item, index),
                    None => Key::Index(index),
                };
                Node::keyed(key, (self.children)(item, index, self.each))
            })
            .collect();

        match &self.wrapper {
            Some(wrapper) => {
                log::trace!("For: {} items wrapped", items.len());
                wrapper.wrap(self.wrapper_props.clone().without_children(), items)
            }
            None => {
                log::trace!("For: {} items", items.len());
                Node::fragment(items)
            }
        }
    }
}

/// Render every item with positional keys and no wrapper.
pub fn for_each<'a, T>(each: &'a [T], children: impl Fn(&T, usize, &[T]) -> Node + 'a) -> Node {
    For::new(each, children).render()
}
