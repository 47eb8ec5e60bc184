//! Transform application
//!
//! Thin bridge from computed offsets to the element's style sink: builds the
//! patch in `parallax_core::style` and pushes it through `apply_styles`.

use parallax_core::{style, ScrollDirection};

use crate::element::ParallaxElement;

/// Write a background-position offset (sign flipped inside the style builder)
pub fn apply_background(
    element: &mut impl ParallaxElement,
    direction: ScrollDirection,
    offset: f32,
) {
    element.apply_styles(&style::background_position(direction, offset));
}

/// Write a foreground translate with transition and compositor hint
pub fn apply_foreground(
    element: &mut impl ParallaxElement,
    direction: ScrollDirection,
    offset: f32,
    transition: &str,
    base_transform: &str,
) {
    element.apply_styles(&style::translate(direction, offset, transition, base_transform));
}

/// Clear background styling before a discontinuous reapply
pub fn reset_background(element: &mut impl ParallaxElement) {
    element.apply_styles(&style::reset_background());
}

/// Clear transform and transition before a discontinuous reapply
pub fn reset_foreground(element: &mut impl ParallaxElement) {
    element.apply_styles(&style::reset_foreground());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::MockElement;
    use parallax_core::CssProperty;

    #[test]
    fn test_background_write() {
        let mut element = MockElement::new(0.0, 0.0);
        apply_background(&mut element, ScrollDirection::Vertical, 40.0);
        assert_eq!(
            element.last_value(CssProperty::BackgroundPosition),
            Some("center -40px".to_string())
        );
    }

    #[test]
    fn test_foreground_write() {
        let mut element = MockElement::new(0.0, 0.0);
        apply_foreground(
            &mut element,
            ScrollDirection::Vertical,
            25.0,
            "transform .2s ease",
            "none",
        );
        assert_eq!(
            element.last_value(CssProperty::Transform),
            Some("translate(0, 25px)".to_string())
        );
        assert_eq!(
            element.last_value(CssProperty::WillChange),
            Some("transform".to_string())
        );
    }

    #[test]
    fn test_reset_then_reapply_sequence() {
        let mut element = MockElement::new(0.0, 0.0);
        reset_foreground(&mut element);
        apply_foreground(&mut element, ScrollDirection::Horizontal, -8.0, "t", "");

        assert_eq!(element.patches.len(), 2);
        assert_eq!(
            element.last_value(CssProperty::Transform),
            Some("translate(-8px, 0)".to_string())
        );
    }
}
