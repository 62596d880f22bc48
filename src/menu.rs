//! Navigation menu toggle.
//!
//! Independent of the scene: a button's `aria-expanded` attribute and the
//! menu's `hidden` class flip together on every click.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Class that hides the menu.
pub const HIDDEN_CLASS: &str = "hidden";

/// Next expanded state given the current `aria-expanded` value. Only the
/// exact string `"true"` counts as expanded.
#[must_use]
pub fn next_expanded(current: Option<&str>) -> bool {
    current != Some("true")
}

/// Attribute text for an expanded flag.
#[must_use]
pub fn aria_value(expanded: bool) -> &'static str {
    if expanded { "true" } else { "false" }
}
