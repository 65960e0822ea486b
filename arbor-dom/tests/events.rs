use arbor_dom::{
    hit_test, hit_test_any, DragGesture, Element, Event, LayoutResult, MouseButton, PointerInput,
    Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

/// Three stacked rows: `a` at y=0, `b` at y=1, `c` at y=2.
fn rows() -> (Element, LayoutResult) {
    let root = Element::col()
        .id("root")
        .child(Element::text("a").id("a"))
        .child(Element::text("b").id("b"))
        .child(Element::text("c").id("c"));
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 3)),
        ("a", Rect::new(0, 0, 10, 1)),
        ("b", Rect::new(0, 1, 10, 1)),
        ("c", Rect::new(0, 2, 10, 1)),
    ]);
    (root, layout)
}

fn press(x: u16, y: u16) -> PointerInput {
    PointerInput::Press {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn release(x: u16, y: u16) -> PointerInput {
    PointerInput::Release {
        x,
        y,
        button: MouseButton::Left,
    }
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_prefers_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("label").id("label"))
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 20, 2)),
        ("label", Rect::new(0, 0, 20, 1)),
        ("btn", Rect::new(0, 1, 20, 1)),
    ]);

    assert_eq!(hit_test(&layout, &root, 3, 1), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 3, 0), None);
    assert_eq!(hit_test_any(&layout, &root, 3, 0), Some("label".to_string()));
}

#[test]
fn test_hit_test_skips_pointer_transparent_elements() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("row").id("row"))
        .child(Element::text("mirror").id("mirror").pointer_events(false));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 1)),
        ("row", Rect::new(0, 0, 10, 1)),
        ("mirror", Rect::new(0, 0, 6, 1)),
    ]);

    // The mirror is on top but never receives the pointer
    assert_eq!(hit_test_any(&layout, &root, 1, 0), Some("row".to_string()));
}

// ============================================================================
// Drag Gesture
// ============================================================================

#[test]
fn test_press_release_is_click() {
    let (root, layout) = rows();
    let mut gesture = DragGesture::new();

    assert!(gesture.handle(press(1, 1), &root, &layout).is_empty());
    let events = gesture.handle(release(1, 1), &root, &layout);

    assert_eq!(
        events,
        vec![Event::Click {
            target: Some("b".to_string()),
            x: 1,
            y: 1,
            button: MouseButton::Left,
        }]
    );
}

#[test]
fn test_drag_sequence() {
    let (root, layout) = rows();
    let mut gesture = DragGesture::new();

    gesture.handle(press(0, 0), &root, &layout);
    let events = gesture.handle(PointerInput::Motion { x: 0, y: 1 }, &root, &layout);
    assert!(gesture.is_dragging());
    assert_eq!(
        events,
        vec![
            Event::DragStart {
                target: Some("a".to_string()),
                x: 0,
                y: 0,
            },
            Event::DragEnter {
                target: Some("b".to_string()),
                x: 0,
                y: 1,
            },
            Event::DragOver {
                target: Some("b".to_string()),
                x: 0,
                y: 1,
            },
        ]
    );

    // Moving within the same element does not re-enter it
    let events = gesture.handle(PointerInput::Motion { x: 4, y: 1 }, &root, &layout);
    assert_eq!(
        events,
        vec![Event::DragOver {
            target: Some("b".to_string()),
            x: 4,
            y: 1,
        }]
    );

    let events = gesture.handle(release(4, 2), &root, &layout);
    assert_eq!(
        events,
        vec![
            Event::Drop {
                target: Some("c".to_string()),
                x: 4,
                y: 2,
            },
            Event::DragEnd {
                target: Some("a".to_string()),
            },
        ]
    );
    assert!(!gesture.is_dragging());
}

#[test]
fn test_release_outside_ends_without_drop() {
    let (root, layout) = rows();
    let mut gesture = DragGesture::new();

    gesture.handle(press(0, 0), &root, &layout);
    gesture.handle(PointerInput::Motion { x: 0, y: 8 }, &root, &layout);
    let events = gesture.handle(release(0, 8), &root, &layout);

    assert_eq!(
        events,
        vec![Event::DragEnd {
            target: Some("a".to_string()),
        }]
    );
}

#[test]
fn test_threshold_delays_drag() {
    let (root, layout) = rows();
    let mut gesture = DragGesture::new().with_threshold(2);

    gesture.handle(press(0, 0), &root, &layout);
    assert!(gesture
        .handle(PointerInput::Motion { x: 1, y: 0 }, &root, &layout)
        .is_empty());
    assert!(!gesture.is_dragging());

    let events = gesture.handle(PointerInput::Motion { x: 2, y: 0 }, &root, &layout);
    assert!(matches!(events.first(), Some(Event::DragStart { .. })));
}

#[test]
fn test_right_button_never_drags() {
    let (root, layout) = rows();
    let mut gesture = DragGesture::new();

    gesture.handle(
        PointerInput::Press {
            x: 0,
            y: 0,
            button: MouseButton::Right,
        },
        &root,
        &layout,
    );
    assert!(gesture
        .handle(PointerInput::Motion { x: 0, y: 2 }, &root, &layout)
        .is_empty());
    assert!(!gesture.is_dragging());
}

// ============================================================================
// Event Accessors
// ============================================================================

#[test]
fn test_event_target_and_position() {
    let event = Event::DragOver {
        target: Some("x".to_string()),
        x: 3,
        y: 4,
    };
    assert_eq!(event.target(), Some("x"));
    assert_eq!(event.position().map(|p| (p.x, p.y)), Some((3, 4)));

    let end = Event::DragEnd { target: None };
    assert_eq!(end.target(), None);
    assert_eq!(end.position(), None);
}
