use arbor_dom::layout::intrinsic_size;
use arbor_dom::{layout, Element, Position, Rect, Size};

// ============================================================================
// Column Flow
// ============================================================================

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .child(Element::text("one").id("a"))
        .child(Element::text("two\nlines").id("b"))
        .child(Element::text("three").id("c"));

    let result = layout(&root, Rect::from_size(20, 10));

    assert_eq!(result["root"], Rect::new(0, 0, 20, 4));
    assert_eq!(result["a"], Rect::new(0, 0, 20, 1));
    assert_eq!(result["b"], Rect::new(0, 1, 20, 2));
    assert_eq!(result["c"], Rect::new(0, 3, 20, 1));
}

#[test]
fn test_column_gap_and_indent() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .gap(1)
        .indent(2)
        .child(Element::text("a").id("a"))
        .child(Element::text("b").id("b"));

    let result = layout(&root, Rect::from_size(10, 10));

    assert_eq!(result["a"], Rect::new(2, 0, 8, 1));
    assert_eq!(result["b"], Rect::new(2, 2, 8, 1));
}

#[test]
fn test_column_clips_to_available_height() {
    let root = Element::col()
        .id("root")
        .height(Size::Fixed(2))
        .child(Element::text("a").id("a"))
        .child(Element::text("b").id("b"))
        .child(Element::text("c").id("c"));

    let result = layout(&root, Rect::from_size(10, 10));

    assert_eq!(result["b"].height, 1);
    assert_eq!(result["c"].height, 0);
}

// ============================================================================
// Row Flow
// ============================================================================

#[test]
fn test_row_places_fixed_auto_and_fill() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .gap(1)
        .child(Element::text("=").id("handle"))
        .child(Element::checkbox(false).id("check"))
        .child(Element::text("label").id("label").width(Size::Fill))
        .child(Element::box_().id("tail").width(Size::Fixed(2)));

    let result = layout(&root, Rect::from_size(20, 1));

    assert_eq!(result["handle"], Rect::new(0, 0, 1, 1));
    assert_eq!(result["check"], Rect::new(2, 0, 3, 1));
    // 20 - (1 + 3 + 2) - 3 gaps = 11
    assert_eq!(result["label"], Rect::new(6, 0, 11, 1));
    assert_eq!(result["tail"], Rect::new(18, 0, 2, 1));
}

// ============================================================================
// Absolute Positioning
// ============================================================================

#[test]
fn test_absolute_child_takes_no_flow_space() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .child(Element::text("a").id("a"))
        .child(
            Element::text("floating")
                .id("mirror")
                .position(Position::Absolute)
                .left(5)
                .top(7),
        )
        .child(Element::text("b").id("b"));

    let result = layout(&root, Rect::from_size(20, 10));

    assert_eq!(result["b"], Rect::new(0, 1, 20, 1));
    assert_eq!(result["mirror"], Rect::new(5, 7, 8, 1));
    assert_eq!(result["root"].height, 2);
}

#[test]
fn test_zero_sized_absolute_element() {
    let root = Element::col().id("root").child(
        Element::box_()
            .id("image")
            .position(Position::Absolute)
            .width(Size::Fixed(0))
            .height(Size::Fixed(0)),
    );

    let result = layout(&root, Rect::from_size(20, 10));
    assert!(result["image"].is_empty());
}

// ============================================================================
// Oversized Content
// ============================================================================

#[test]
fn test_wide_input_saturates_instead_of_overflowing() {
    let input = Element::input("x".repeat(65_534));
    assert_eq!(intrinsic_size(&input), (u16::MAX, 1));
}

#[test]
fn test_text_wider_than_u16_is_clamped() {
    let text = Element::text("x".repeat(70_000));
    assert_eq!(intrinsic_size(&text), (u16::MAX, 1));

    let lines = Element::text("y\n".repeat(70_000));
    assert_eq!(intrinsic_size(&lines).1, u16::MAX);
}

#[test]
fn test_oversized_content_still_lays_out() {
    let root = Element::row()
        .id("root")
        .child(Element::input("x".repeat(70_000)).id("wide"));

    let result = layout(&root, Rect::from_size(20, 5));

    assert_eq!(result["wide"].height, 1);
    assert!(result["wide"].right() <= 20);
}

// ============================================================================
// Rect
// ============================================================================

#[test]
fn test_upper_half_includes_midpoint() {
    let rect = Rect::new(0, 10, 5, 4);
    assert!(rect.is_upper_half(10));
    assert!(rect.is_upper_half(12));
    assert!(!rect.is_upper_half(13));

    let odd = Rect::new(0, 0, 5, 3);
    assert!(odd.is_upper_half(1));
    assert!(!odd.is_upper_half(2));
}

#[test]
fn test_rect_contains() {
    let rect = Rect::new(2, 2, 3, 2);
    assert!(rect.contains(2, 2));
    assert!(rect.contains(4, 3));
    assert!(!rect.contains(5, 3));
    assert!(!rect.contains(4, 4));
}
