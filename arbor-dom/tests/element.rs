use arbor_dom::{
    find_element, find_path, get_child_by_property, list_children_by_property,
    set_child_property, set_children_property, Element, Property,
};

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_path_returns_ancestors() {
    let root = Element::col().id("root").child(
        Element::row()
            .id("row")
            .child(Element::text("a").id("leaf")),
    );

    let path: Vec<&str> = find_path(&root, "leaf")
        .unwrap()
        .iter()
        .map(|el| el.id.as_str())
        .collect();
    assert_eq!(path, vec!["root", "row", "leaf"]);
    assert!(find_path(&root, "missing").is_none());
    assert!(find_element(&root, "row").is_some());
}

#[test]
fn test_remove_child() {
    let mut root = Element::col()
        .id("root")
        .child(Element::text("a").id("a"))
        .child(Element::text("b").id("b"));

    let removed = root.remove_child("a").unwrap();
    assert_eq!(removed.id, "a");
    assert_eq!(root.content.children().len(), 1);
    assert!(root.remove_child("a").is_none());

    root.clear();
    assert!(root.content.children().is_empty());
}

#[test]
fn test_data_flags() {
    let mut el = Element::box_().flag("expanded", true);
    assert!(el.has_flag("expanded"));
    assert_eq!(el.get_data("expanded").map(String::as_str), Some("on"));

    el.set_flag("expanded", false);
    assert!(!el.has_flag("expanded"));
}

// ============================================================================
// Child Properties
// ============================================================================

#[test]
fn test_set_child_property_targets_first_supporting_descendant() {
    let mut wrapper = Element::row()
        .child(Element::text("label"))
        .child(Element::input("").id("field"))
        .child(Element::input("").id("second"));

    assert!(set_child_property(&mut wrapper, Property::Required, true));
    assert!(find_element(&wrapper, "field").unwrap().required);
    assert!(!find_element(&wrapper, "second").unwrap().required);
}

#[test]
fn test_set_child_property_without_support() {
    let mut plain = Element::text("label");
    assert!(!set_child_property(&mut plain, Property::Checked, true));
    assert!(!plain.checked);
    // Every element can be disabled
    assert!(set_child_property(&mut plain, Property::Disabled, true));
    assert!(plain.disabled);
}

#[test]
fn test_children_property_helpers() {
    let mut elements = vec![
        Element::checkbox(false).id("one"),
        Element::text("no checkbox"),
        Element::row().child(Element::checkbox(false).id("two")),
    ];

    set_children_property(&mut elements, Property::Checked, true);

    let checked: Vec<&str> = list_children_by_property(&elements, Property::Checked)
        .map(|el| el.id.as_str())
        .collect();
    assert_eq!(checked, vec!["one", "two"]);
    assert!(list_children_by_property(&elements, Property::Checked).all(|el| el.checked));
    assert!(get_child_by_property(&elements[1], Property::Checked).is_none());
}

// ============================================================================
// Validity
// ============================================================================

#[test]
fn test_plain_elements_expose_no_validity() {
    let el = Element::col().child(Element::text("hello"));
    assert_eq!(el.check_validity(), None);
}

#[test]
fn test_required_input_validity() {
    let mut input = Element::input("").required(true);
    assert_eq!(input.check_validity(), Some(false));

    input.set_value("filled");
    assert_eq!(input.check_validity(), Some(true));
}

#[test]
fn test_required_checkbox_validity() {
    let checkbox = Element::checkbox(false).required(true);
    assert_eq!(checkbox.check_validity(), Some(false));
    assert_eq!(checkbox.checked(true).check_validity(), Some(true));
}

#[test]
fn test_disabled_controls_are_valid() {
    let input = Element::input("").required(true).disabled(true);
    assert_eq!(input.check_validity(), Some(true));
}

#[test]
fn test_custom_validator() {
    let el = Element::text("abc").validator(|el| el.content.text().is_some_and(|t| t.len() > 3));
    assert_eq!(el.check_validity(), Some(false));
    assert!(el.supports(Property::Required));
}

#[test]
fn test_report_validity_marks_element() {
    let mut wrapper = Element::row().child(Element::input("").id("field").required(true));

    assert_eq!(wrapper.report_validity(), Some(false));
    assert!(find_element(&wrapper, "field").unwrap().has_flag("invalid"));

    assert_eq!(wrapper.check_validity(), Some(false));
}
