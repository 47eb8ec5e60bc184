//! Per-element binding record
//!
//! One `ElementBinding` per bound element, created at bind time and released
//! at unbind. Holds the cached geometry the event handlers compute against,
//! the set-once scroll anchor, and the settings resolved from data
//! attributes at bind (fixed for the binding's lifetime).

use parallax_core::{EffectType, FactorOverrides, ParallaxOptions, ScrollAnchor, ScrollDirection};

use crate::element::{resolve_settings, ParallaxElement};

/// State record for one bound element
///
/// Cache refresh rules: `element_height` and `viewport_width` refresh on
/// resize only; `element_offset_top` refreshes on resize (visibility testing
/// reads fresh geometry straight off the element on every event instead).
pub struct ElementBinding<E> {
    /// The driven element, owned for the binding's lifetime
    pub element: E,
    /// Cached outer height
    pub element_height: f32,
    /// Cached top offset relative to the document
    pub element_offset_top: f32,
    /// Cached viewport width, drives breakpoint resolution
    pub viewport_width: f32,
    /// Baseline making foreground offsets relative to the bind-time position
    pub anchor: ScrollAnchor,
    /// CSS transform captured at bind, appended to every computed transform
    pub initial_transform: String,
    /// Resolved at bind, fixed thereafter
    pub effect: EffectType,
    pub direction: ScrollDirection,
    pub transition: String,
    /// Factor overrides parsed from data attributes at bind
    pub overrides: FactorOverrides,
    /// Configuration this binding was created with
    pub options: ParallaxOptions,
}

impl<E: ParallaxElement> ElementBinding<E> {
    /// Capture a new binding: geometry, initial transform, resolved settings
    pub fn capture(element: E, viewport_width: f32, options: &ParallaxOptions) -> Self {
        let settings = resolve_settings(&element, options);
        Self {
            element_height: element.outer_height(),
            element_offset_top: element.offset_top(),
            viewport_width,
            anchor: ScrollAnchor::new(),
            initial_transform: element.current_transform(),
            effect: settings.effect,
            direction: settings.direction,
            transition: settings.transition,
            overrides: settings.overrides,
            options: options.clone(),
            element,
        }
    }

    /// Refresh the resize-scoped caches from fresh readings
    pub fn refresh_geometry(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width;
        self.element_offset_top = self.element.offset_top();
        self.element_height = self.element.outer_height();
    }
}
