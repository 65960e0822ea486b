use std::cell::Cell;
use std::rc::Rc;

use arbor::dom::{
    layout, render_to_buffer, Buffer, DragGesture, DropEffect, Element, Event, LayoutResult,
    MouseButton, PointerInput, Rect,
};
use arbor::{node_element_id, part_element_id, EventResult, Hooks, ItemKey, Part, Tree, TreeConfig};

fn frame(tree: &Tree<&'static str>) -> (Element, LayoutResult) {
    let root = tree.render();
    let layout = layout(&root, Rect::from_size(30, 10));
    (root, layout)
}

fn click(key: ItemKey, part: Part) -> Event {
    Event::Click {
        target: Some(part_element_id(key, part)),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    }
}

fn drag_start(key: ItemKey, part: Part) -> Event {
    Event::DragStart {
        target: Some(part_element_id(key, part)),
        x: 0,
        y: 0,
    }
}

fn drag_enter(key: ItemKey, y: u16) -> Event {
    Event::DragEnter {
        target: Some(part_element_id(key, Part::Content)),
        x: 0,
        y,
    }
}

fn counting_hooks(changes: &Rc<Cell<usize>>) -> Hooks<&'static str> {
    let counter = Rc::clone(changes);
    Hooks::new().on_change(move || counter.set(counter.get() + 1))
}

/// Tree with `parent` (expanded, holding `x` and `y`) and `sibling`.
fn nested_tree() -> (Tree<&'static str>, [ItemKey; 4]) {
    let mut tree = Tree::new(TreeConfig::new().draggable());
    let parent = tree.add_node("parent").key();
    let sibling = tree.add_node("sibling").key();
    let node = tree.node_mut(parent).unwrap();
    let x = node.add_node("x").key();
    let y = node.add_node("y").key();
    node.set_expanded(true);
    (tree, [parent, sibling, x, y])
}

// ============================================================================
// Click
// ============================================================================

#[test]
fn test_click_content_toggles_selection_without_checker() {
    let mut tree = Tree::new(TreeConfig::new().value(vec!["a", "b"]).selectable());
    let (_, layout) = frame(&tree);
    let b = tree.keys()[1];

    assert_eq!(tree.dispatch(&click(b, Part::Content), &layout), EventResult::Consumed);
    assert_eq!(tree.selected(), Some("b"));

    assert_eq!(tree.dispatch(&click(b, Part::Content), &layout), EventResult::Consumed);
    assert_eq!(tree.selected(), None);
}

#[test]
fn test_click_uses_checker_when_present() {
    let hooks = Hooks::<&str>::new().on_render_node(|request| {
        request.checker = Some(Element::checkbox(false));
        false
    });
    let mut tree = Tree::with_hooks(
        TreeConfig::new().value(vec!["a"]).selectable(),
        Rc::new(hooks),
    );
    let (_, layout) = frame(&tree);
    let a = tree.keys()[0];

    assert_eq!(tree.dispatch(&click(a, Part::Content), &layout), EventResult::Ignored);
    assert_eq!(tree.selected(), None);

    assert_eq!(tree.dispatch(&click(a, Part::Checker), &layout), EventResult::Consumed);
    assert_eq!(tree.selected(), Some("a"));
}

#[test]
fn test_click_ignored_when_not_selectable() {
    let mut tree = Tree::new(TreeConfig::new().value(vec!["a"]));
    let (_, layout) = frame(&tree);
    let a = tree.keys()[0];

    assert_eq!(tree.dispatch(&click(a, Part::Content), &layout), EventResult::Ignored);
    assert_eq!(tree.selected(), None);
}

#[test]
fn test_click_selects_nested_node() {
    let (mut tree, [parent, _, x, _]) = nested_tree();
    tree.set_selectable(true);
    let (_, layout) = frame(&tree);

    assert_eq!(tree.dispatch(&click(x, Part::Content), &layout), EventResult::Consumed);
    assert_eq!(tree.selected(), Some("x"));
    assert!(!tree.node(parent).unwrap().is_selected());
}

#[test]
fn test_click_opener_toggles_expansion() {
    let hooks = Hooks::<&str>::new().on_render_node(|request| {
        request.opener = Some(Element::text("+"));
        false
    });
    let mut tree = Tree::with_hooks(TreeConfig::new().value(vec!["a", "b"]), Rc::new(hooks));
    let (a, b) = (tree.keys()[0], tree.keys()[1]);
    tree.node_mut(a).unwrap().add_node("child");
    let (_, layout) = frame(&tree);

    assert_eq!(tree.dispatch(&click(a, Part::Opener), &layout), EventResult::Consumed);
    assert!(tree.node(a).unwrap().is_expanded());

    // Leaves render no opener
    assert_eq!(tree.dispatch(&click(b, Part::Opener), &layout), EventResult::Ignored);
    assert!(!tree.node(b).unwrap().is_expanded());
}

#[test]
fn test_click_without_target_is_ignored() {
    let mut tree = Tree::new(TreeConfig::new().value(vec!["a"]).selectable());
    let (_, layout) = frame(&tree);
    let event = Event::Click {
        target: None,
        x: 0,
        y: 0,
        button: MouseButton::Left,
    };
    assert_eq!(tree.dispatch(&event, &layout), EventResult::Ignored);
}

// ============================================================================
// Drag Start
// ============================================================================

#[test]
fn test_drag_start_from_content_without_dragger() {
    let mut tree = Tree::new(TreeConfig::new().value(vec!["a", "b"]).draggable());
    let (_, layout) = frame(&tree);
    let a = tree.keys()[0];

    assert_eq!(tree.dispatch(&drag_start(a, Part::Content), &layout), EventResult::StartDrag);
    assert_eq!(tree.drag_source(), Some(a));

    let transfer = tree.data_transfer().unwrap();
    assert_eq!(transfer.effect_allowed, DropEffect::Move);
    assert!(transfer.drag_image.is_some());
}

#[test]
fn test_drag_start_only_from_dragger_when_present() {
    let hooks = Hooks::<&str>::new().on_render_node(|request| {
        request.dragger = Some(Element::text("="));
        false
    });
    let mut tree = Tree::with_hooks(
        TreeConfig::new().value(vec!["a"]).draggable(),
        Rc::new(hooks),
    );
    let (_, layout) = frame(&tree);
    let a = tree.keys()[0];

    assert_eq!(tree.dispatch(&drag_start(a, Part::Content), &layout), EventResult::Ignored);
    assert!(!tree.is_dragging());

    assert_eq!(tree.dispatch(&drag_start(a, Part::Dragger), &layout), EventResult::StartDrag);
    assert!(tree.is_dragging());
}

#[test]
fn test_drag_start_ignored_when_disabled() {
    let mut tree = Tree::new(TreeConfig::new().value(vec!["a"]).draggable().disabled());
    let (_, layout) = frame(&tree);
    let a = tree.keys()[0];

    assert_eq!(tree.dispatch(&drag_start(a, Part::Content), &layout), EventResult::Ignored);
    assert!(tree.data_transfer().is_none());
}

// ============================================================================
// Nested Drag
// ============================================================================

#[test]
fn test_nested_drag_enter_reorders_owning_level() {
    let (mut tree, [parent, _, x, y]) = nested_tree();
    let (_, mut layout) = frame(&tree);
    assert_eq!(tree.dispatch(&drag_start(x, Part::Content), &layout), EventResult::StartDrag);

    // Tall row so the lower half is reachable
    layout.insert(node_element_id(y), Rect::new(2, 4, 20, 4));
    assert_eq!(tree.dispatch(&drag_enter(y, 7), &layout), EventResult::Consumed);

    assert_eq!(tree.node(parent).unwrap().subtree().keys(), &[y, x]);
}

#[test]
fn test_drag_enter_on_other_level_is_ignored() {
    let (mut tree, [parent, sibling, x, y]) = nested_tree();
    let (_, layout) = frame(&tree);
    tree.dispatch(&drag_start(x, Part::Content), &layout);

    assert_eq!(tree.dispatch(&drag_enter(sibling, 0), &layout), EventResult::Ignored);
    assert_eq!(tree.node(parent).unwrap().subtree().keys(), &[x, y]);
    assert_eq!(tree.keys(), &[parent, sibling]);
}

#[test]
fn test_pointer_move_tracks_nested_mirror() {
    let (mut tree, [_, _, x, _]) = nested_tree();
    let (_, layout) = frame(&tree);
    tree.dispatch(&drag_start(x, Part::Content), &layout);

    let event = Event::PointerMove { x: 9, y: 3 };
    assert_eq!(tree.dispatch(&event, &layout), EventResult::Consumed);

    let level = tree.dragging_level_mut().unwrap();
    let mirror = level.mirror().unwrap();
    assert_eq!((mirror.left, mirror.top), (Some(9), Some(3)));
}

#[test]
fn test_drop_outside_dragging_level_is_ignored() {
    let changes = Rc::new(Cell::new(0));
    let mut tree = Tree::with_hooks(
        TreeConfig::new().value(vec!["parent", "sibling"]).draggable(),
        Rc::new(counting_hooks(&changes)),
    );
    let (parent, sibling) = (tree.keys()[0], tree.keys()[1]);
    let x = {
        let node = tree.node_mut(parent).unwrap();
        node.set_expanded(true);
        let x = node.add_node("x").key();
        node.add_node("y");
        x
    };
    let (_, layout) = frame(&tree);
    tree.dispatch(&drag_start(x, Part::Content), &layout);

    let outside = Event::Drop {
        target: Some(part_element_id(sibling, Part::Content)),
        x: 0,
        y: 0,
    };
    assert_eq!(tree.dispatch(&outside, &layout), EventResult::Ignored);
    assert_eq!(changes.get(), 0);

    let inside = Event::Drop {
        target: Some(part_element_id(x, Part::Content)),
        x: 0,
        y: 0,
    };
    assert_eq!(tree.dispatch(&inside, &layout), EventResult::Consumed);
    assert_eq!(changes.get(), 1);
}

#[test]
fn test_drag_end_without_drag_is_ignored() {
    let mut tree = Tree::new(TreeConfig::new().value(vec!["a"]).draggable());
    let (_, layout) = frame(&tree);
    let event = Event::DragEnd { target: None };
    assert_eq!(tree.dispatch(&event, &layout), EventResult::Ignored);
}

// ============================================================================
// Gesture to Reorder
// ============================================================================

#[test]
fn test_mouse_drag_reorders_tree() {
    let changes = Rc::new(Cell::new(0));
    let mut tree = Tree::with_hooks(
        TreeConfig::new().value(vec!["a", "b", "c"]).draggable(),
        Rc::new(counting_hooks(&changes)),
    );
    let (root, layout) = frame(&tree);
    let mut gesture = DragGesture::new();

    let mut results = Vec::new();
    for input in [
        PointerInput::Press {
            x: 0,
            y: 0,
            button: MouseButton::Left,
        },
        PointerInput::Motion { x: 0, y: 2 },
        PointerInput::Release {
            x: 0,
            y: 2,
            button: MouseButton::Left,
        },
    ] {
        for event in gesture.handle(input, &root, &layout) {
            results.push(tree.dispatch(&event, &layout));
        }
    }

    assert_eq!(
        results,
        vec![
            EventResult::StartDrag,
            EventResult::Consumed,
            EventResult::Consumed,
            EventResult::Consumed,
            EventResult::Consumed,
        ]
    );
    // One-row nodes: the pointer is always on the upper half, so `a` lands before `c`
    assert_eq!(tree.items(), vec!["b", "a", "c"]);
    assert_eq!(changes.get(), 1);
    assert!(!tree.is_dragging());
    assert!(tree.nodes().all(|node| !node.is_dragging()));

    let (root, layout) = frame(&tree);
    let mut buffer = Buffer::new(30, 3);
    render_to_buffer(&root, &layout, &mut buffer);
    assert_eq!(buffer.lines(), vec!["b", "a", "c"]);
}

#[test]
fn test_mouse_click_selects() {
    let mut tree = Tree::new(TreeConfig::new().value(vec!["a", "b"]).selectable());
    let (root, layout) = frame(&tree);
    let mut gesture = DragGesture::new();

    gesture.handle(
        PointerInput::Press {
            x: 3,
            y: 1,
            button: MouseButton::Left,
        },
        &root,
        &layout,
    );
    let events = gesture.handle(
        PointerInput::Release {
            x: 3,
            y: 1,
            button: MouseButton::Left,
        },
        &root,
        &layout,
    );

    assert_eq!(events.len(), 1);
    assert_eq!(tree.dispatch(&events[0], &layout), EventResult::Consumed);
    assert_eq!(tree.selected(), Some("b"));
}
