//! Viewport visibility predicate
//!
//! Gates whether an event touches the DOM at all: offscreen elements keep
//! their last-applied offset untouched.

/// Whether any part of the element lies within the scrolled viewport window
///
/// Inclusive on both bounds - an element exactly flush with a viewport edge
/// counts as visible.
pub fn is_visible(
    element_top: f32,
    element_height: f32,
    scroll_top: f32,
    viewport_height: f32,
) -> bool {
    let element_bottom = element_top + element_height;
    element_bottom >= scroll_top && element_top <= scroll_top + viewport_height
}
