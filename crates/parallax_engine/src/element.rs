//! Host element seam
//!
//! The engine never touches a real DOM. Hosts implement `ParallaxElement`
//! for whatever node type they have; the engine reads geometry and data
//! attributes through it and writes style patches back through it.

use std::str::FromStr;

use parallax_core::{
    attr, AttrError, EffectType, FactorOverrides, ParallaxOptions, ScrollDirection, StylePatch,
};

/// A DOM-like node the engine can drive
///
/// Geometry readings are expected to be cheap; the engine calls them on
/// every scroll/resize event for visibility testing.
pub trait ParallaxElement {
    /// Top offset relative to the document, in pixels
    fn offset_top(&self) -> f32;

    /// Outer height in pixels (0 when not yet laid out)
    fn outer_height(&self) -> f32;

    /// Per-element override attribute (`parallax-*` keys), if present
    fn data_attr(&self, key: &str) -> Option<String>;

    /// The element's computed CSS transform (may be the `"none"` sentinel)
    fn current_transform(&self) -> String;

    /// Write a batch of CSS properties to the element's style
    fn apply_styles(&mut self, patch: &StylePatch);
}

/// Settings resolved once at bind time and held fixed for the binding
#[derive(Clone, Debug)]
pub struct ResolvedSettings {
    pub effect: EffectType,
    pub direction: ScrollDirection,
    pub transition: String,
    pub overrides: FactorOverrides,
}

fn parse_attr<T: FromStr>(element: &impl ParallaxElement, key: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    let raw = element.data_attr(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            // Malformed attributes are inert, never fatal
            tracing::warn!(key, value = %raw, %err, "ignoring unparsable parallax attribute");
            None
        }
    }
}

fn parse_factor(element: &impl ParallaxElement, key: &str) -> Option<f32> {
    let raw = element.data_attr(key)?;
    match raw.parse::<f32>() {
        Ok(value) => Some(value),
        Err(_) => {
            let err = AttrError::InvalidFactor(raw);
            tracing::warn!(key, %err, "ignoring non-numeric parallax factor");
            None
        }
    }
}

/// Resolve effect, direction, transition, and factor overrides for an element
///
/// Data attributes win over `options`; unparsable attributes are logged and
/// treated as absent.
pub fn resolve_settings(
    element: &impl ParallaxElement,
    options: &ParallaxOptions,
) -> ResolvedSettings {
    ResolvedSettings {
        effect: parse_attr(element, attr::TYPE).unwrap_or(options.effect),
        direction: parse_attr(element, attr::DIRECTION).unwrap_or(options.direction),
        transition: element
            .data_attr(attr::TRANSITION)
            .unwrap_or_else(|| options.transition.clone()),
        overrides: FactorOverrides {
            base: parse_factor(element, attr::FACTOR),
            xs: parse_factor(element, attr::FACTOR_XS),
            sm: parse_factor(element, attr::FACTOR_SM),
            md: parse_factor(element, attr::FACTOR_MD),
            lg: parse_factor(element, attr::FACTOR_LG),
            xl: parse_factor(element, attr::FACTOR_XL),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::MockElement;

    #[test]
    fn test_attributes_override_options() {
        let element = MockElement::new(500.0, 200.0)
            .with_attr(attr::TYPE, "foreground")
            .with_attr(attr::DIRECTION, "horizontal")
            .with_attr(attr::TRANSITION, "transform 1s linear")
            .with_attr(attr::FACTOR_SM, "0.3");
        let options = ParallaxOptions::new().factor_sm(0.1);

        let settings = resolve_settings(&element, &options);
        assert_eq!(settings.effect, EffectType::Foreground);
        assert_eq!(settings.direction, ScrollDirection::Horizontal);
        assert_eq!(settings.transition, "transform 1s linear");
        assert_eq!(settings.overrides.sm, Some(0.3));
        assert_eq!(settings.overrides.base, None);
    }

    #[test]
    fn test_absent_attributes_fall_back_to_options() {
        let element = MockElement::new(0.0, 0.0);
        let options = ParallaxOptions::new()
            .effect(EffectType::Foreground)
            .transition("transform .4s ease");

        let settings = resolve_settings(&element, &options);
        assert_eq!(settings.effect, EffectType::Foreground);
        assert_eq!(settings.direction, ScrollDirection::Vertical);
        assert_eq!(settings.transition, "transform .4s ease");
        assert_eq!(settings.overrides, FactorOverrides::default());
    }

    #[test]
    fn test_malformed_attributes_are_ignored() {
        let element = MockElement::new(0.0, 0.0)
            .with_attr(attr::TYPE, "sideways")
            .with_attr(attr::FACTOR, "fast");
        let options = ParallaxOptions::default();

        let settings = resolve_settings(&element, &options);
        assert_eq!(settings.effect, EffectType::Background);
        assert_eq!(settings.overrides.base, None);
    }

    #[test]
    fn test_zero_attribute_is_configured() {
        let element = MockElement::new(0.0, 0.0).with_attr(attr::FACTOR_XS, "0");
        let settings = resolve_settings(&element, &ParallaxOptions::default());
        assert_eq!(settings.overrides.xs, Some(0.0));
    }
}
