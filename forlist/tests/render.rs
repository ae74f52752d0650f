use std::cell::{Cell, RefCell};

use forlist::prelude::*;
use keydom::reconcile::{diff, index_children};
use keydom::{Change, Content};
use serde::Deserialize;

fn item_text(node: &Node) -> String {
    node.text_content()
}

// ============================================================================
// Populated output
// ============================================================================

#[test]
fn test_scenario_a_positional_keys_in_order() {
    let list = ["a", "b", "c"];

    let out = For::new(&list, |item, _, _| Node::text(*item)).render();

    assert!(out.is_fragment());
    let children = out.child_nodes();
    assert_eq!(children.len(), 3);
    for (i, child) in children.iter().enumerate() {
        assert_eq!(child.key, Some(Key::Index(i)));
        assert_eq!(item_text(child), list[i]);
    }
}

#[test]
fn test_render_fn_receives_item_index_and_full_list() {
    let list = vec![10, 20, 30];
    let calls = RefCell::new(Vec::new());

    let out = For::new(&list, |item, index, all| {
        calls.borrow_mut().push((*item, index, all.to_vec()));
        Node::text(item.to_string())
    })
    .render();

    assert_eq!(out.child_nodes().len(), 3);
    assert_eq!(
        calls.into_inner(),
        vec![
            (10, 0, list.clone()),
            (20, 1, list.clone()),
            (30, 2, list.clone()),
        ]
    );
}

#[test]
fn test_rendered_node_is_kept_verbatim_inside_keyed_slot() {
    let list = ["x"];

    let out = For::new(&list, |item, _, _| {
        Node::element(Tag::LI).key("own").child(Node::text(*item))
    })
    .render();

    let slot = &out.child_nodes()[0];
    assert_eq!(slot.key, Some(Key::Index(0)));
    let rendered = &slot.child_nodes()[0];
    assert_eq!(rendered.key, Some(Key::from("own")));
    assert_eq!(rendered.tag(), Some(&Tag::LI));
}

#[test]
fn test_no_sorting_filtering_or_dedup() {
    let list = ["b", "a", "b", "c"];

    let out = For::new(&list, |item, _, _| Node::text(*item))
        .key_by(|item, _| Key::from(*item))
        .render();

    let keys: Vec<_> = out.child_nodes().iter().map(|n| n.key.clone()).collect();
    assert_eq!(
        keys,
        vec![
            Some(Key::from("b")),
            Some(Key::from("a")),
            Some(Key::from("b")),
            Some(Key::from("c")),
        ]
    );
    assert_eq!(out.text_content(), "babc");
}

#[test]
fn test_key_extractor_gets_item_and_index() {
    let list = ["p", "q"];

    let out = For::new(&list, |item, _, _| Node::text(*item))
        .key_by(|item, index| Key::from(format!("{item}-{index}")))
        .render();

    assert_eq!(out.child_nodes()[0].key, Some(Key::from("p-0")));
    assert_eq!(out.child_nodes()[1].key, Some(Key::from("q-1")));
}

#[test]
fn test_render_is_repeatable() {
    let list = ["a", "b"];
    let component = For::new(&list, |item, _, _| Node::text(*item));

    assert_eq!(component.render(), component.render());
}

#[test]
fn test_for_each_shorthand() {
    let out = for_each(&[1, 2], |n, _, _| Node::text(n.to_string()));
    assert_eq!(out.text_content(), "12");
    assert_eq!(out.child_nodes()[1].key, Some(Key::Index(1)));
}

// ============================================================================
// Loading state
// ============================================================================

#[test]
fn test_scenario_c_loading_wins_over_items() {
    let list = ["x"];
    let rendered = Cell::new(0);

    let out = For::new(&list, |item, _, _| {
        rendered.set(rendered.get() + 1);
        Node::text(*item)
    })
    .loading(|| Node::text("spinner"))
    .is_loading(true)
    .render();

    assert_eq!(out, Node::text("spinner"));
    assert_eq!(rendered.get(), 0);
}

#[test]
fn test_loading_wins_over_empty_and_wrapper() {
    let list: [&str; 0] = [];

    let out = For::new(&list, |item, _, _| Node::text(*item))
        .empty(|| Node::text("none"))
        .loading(|| Node::text("spinner"))
        .is_loading(true)
        .wrap(Tag::UL)
        .render();

    assert_eq!(out, Node::text("spinner"));
}

#[test]
fn test_loading_flag_without_producer_falls_through() {
    let list = ["a", "b"];

    let out = For::new(&list, |item, _, _| Node::text(*item))
        .is_loading(true)
        .render();

    assert!(out.is_fragment());
    assert_eq!(out.child_nodes().len(), 2);
    assert_eq!(out.text_content(), "ab");
}

#[test]
fn test_loading_producer_without_flag_is_ignored() {
    let list = ["a"];
    let loading_calls = Cell::new(0);

    let out = For::new(&list, |item, _, _| Node::text(*item))
        .loading(|| {
            loading_calls.set(loading_calls.get() + 1);
            Node::text("spinner")
        })
        .render();

    assert_eq!(out.text_content(), "a");
    assert_eq!(loading_calls.get(), 0);
}

// ============================================================================
// Empty state
// ============================================================================

#[test]
fn test_scenario_b_empty_producer() {
    let list: Vec<String> = Vec::new();
    let rendered = Cell::new(0);

    let out = For::new(&list, |item, _, _| {
        rendered.set(rendered.get() + 1);
        Node::text(item.clone())
    })
    .empty(|| Node::text("none"))
    .render();

    assert_eq!(out, Node::text("none"));
    assert_eq!(rendered.get(), 0);
}

#[test]
fn test_empty_list_without_producer_is_empty_sequence() {
    let list: Vec<u8> = Vec::new();

    let out = For::new(&list, |n, _, _| Node::text(n.to_string())).render();

    assert_eq!(out, Node::fragment(Vec::new()));
}

#[test]
fn test_empty_list_without_producer_still_wraps() {
    let list: Vec<u8> = Vec::new();

    let out = For::new(&list, |n, _, _| Node::text(n.to_string()))
        .wrap(Tag::UL)
        .render();

    assert_eq!(out.tag(), Some(&Tag::UL));
    assert!(out.child_nodes().is_empty());
}

#[test]
fn test_empty_producer_skipped_when_items_exist() {
    let list = ["a"];

    let out = For::new(&list, |item, _, _| Node::text(*item))
        .empty(|| Node::text("none"))
        .render();

    assert_eq!(out.text_content(), "a");
}

#[test]
fn test_empty_state_bypasses_wrapper() {
    let list: [&str; 0] = [];

    let out = For::new(&list, |item, _, _| Node::text(*item))
        .empty(|| Node::text("none"))
        .wrap(Tag::UL)
        .wrapper_props(Attrs::new().set("class", "items"))
        .render();

    assert_eq!(out, Node::text("none"));
}

// ============================================================================
// Wrapper
// ============================================================================

#[derive(Debug, Deserialize)]
struct Record {
    id: i64,
    name: String,
}

#[test]
fn test_scenario_d_keyed_records_in_list_container() {
    let list: Vec<Record> = serde_json::from_str(r#"[{"id": 5, "name": "r"}]"#).unwrap();

    let out = For::new(&list, |record, _, _| {
        Node::element(Tag::LI).child(Node::text(record.name.clone()))
    })
    .key_by(|record, _| record.id.into())
    .wrap(Tag::UL)
    .render();

    assert_eq!(out.tag(), Some(&Tag::UL));
    assert_eq!(out.child_nodes().len(), 1);
    assert_eq!(out.child_nodes()[0].key, Some(Key::Num(5)));
    assert_eq!(out.text_content(), "r");
}

#[test]
fn test_wrapper_attributes_exclude_children() {
    let list = ["a", "b"];

    let out = For::new(&list, |item, _, _| Node::text(*item))
        .wrap(Tag::DIV)
        .wrapper_props(
            Attrs::new()
                .set("class", "grid")
                .set("children", "should not leak"),
        )
        .render();

    let attrs = out.get_attrs().unwrap();
    assert_eq!(attrs, &Attrs::new().set("class", "grid"));

    match &out.content {
        Content::Element { children, .. } => {
            assert_eq!(children.len(), 2);
            assert_eq!(children[0].key, Some(Key::Index(0)));
            assert_eq!(children[1].key, Some(Key::Index(1)));
        }
        other => panic!("expected wrapper element, got {other:?}"),
    }
}

#[test]
fn test_props_set_before_wrap_are_kept() {
    let list = ["a"];

    let out = For::new(&list, |item, _, _| Node::text(*item))
        .wrapper_props(Attrs::new().set("role", "list"))
        .wrap(Tag::OL)
        .render();

    assert_eq!(out.get_attrs().unwrap().get("role"), Some("list"));
}

#[test]
fn test_component_wrapper_receives_attrs_and_items() {
    let list = ["a", "b"];
    let seen = RefCell::new(None);

    let card = |attrs: Attrs, children: Vec<Node>| {
        *seen.borrow_mut() = Some((attrs.clone(), children.len()));
        Node::element(Tag::DIV)
            .attr("data-component", "card")
            .attrs(attrs)
            .children(children)
    };

    let out = For::new(&list, |item, _, _| Node::text(*item))
        .wrap(card)
        .wrapper_props(Attrs::new().set("id", "cards"))
        .render();

    assert_eq!(
        seen.into_inner(),
        Some((Attrs::new().set("id", "cards"), 2))
    );
    assert_eq!(out.get_attrs().unwrap().get("data-component"), Some("card"));
    assert_eq!(out.text_content(), "ab");
}

// ============================================================================
// Identity across render passes
// ============================================================================

#[test]
fn test_keyed_items_survive_reorder() {
    let before = vec![(1, "one"), (2, "two"), (3, "three")];
    let after = vec![(3, "three"), (1, "one"), (2, "two")];

    let render = |list: &[(i32, &str)]| {
        For::new(list, |(_, name), _, _| Node::text(*name))
            .key_by(|(id, _), _| (*id).into())
            .render()
    };

    let old = render(&before);
    let new = render(&after);
    let changes = diff(old.child_nodes(), new.child_nodes());

    assert_eq!(changes.len(), 3);
    assert!(changes.iter().all(|c| matches!(c, Change::Keep { .. })));
    assert_eq!(
        changes[0],
        Change::Keep {
            key: Key::Num(3),
            from: 2,
            to: 0
        }
    );
}

#[test]
fn test_duplicate_keys_are_left_to_the_host() {
    let list = ["a", "a"];

    let out = For::new(&list, |item, _, _| Node::text(*item))
        .key_by(|item, _| Key::from(*item))
        .render();

    // Both nodes are produced; the host index keeps the last one.
    assert_eq!(out.child_nodes().len(), 2);
    let index = index_children(out.child_nodes());
    assert_eq!(index.get(&Key::from("a")), Some(1));
}
