use super::*;

#[test]
fn collapsed_menu_expands() {
    assert!(next_expanded(Some("false")));
}

#[test]
fn expanded_menu_collapses() {
    assert!(!next_expanded(Some("true")));
}

#[test]
fn missing_attribute_counts_as_collapsed() {
    assert!(next_expanded(None));
}

#[test]
fn unexpected_attribute_counts_as_collapsed() {
    assert!(next_expanded(Some("TRUE")));
    assert!(next_expanded(Some("")));
}

#[test]
fn aria_value_round_trips_through_next() {
    assert!(!next_expanded(Some(aria_value(true))));
    assert!(next_expanded(Some(aria_value(false))));
}
