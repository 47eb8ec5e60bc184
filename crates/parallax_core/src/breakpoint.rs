//! Breakpoint resolution
//!
//! Maps a viewport width onto one of six responsive bands and resolves the
//! effective speed factor for that band. Exactly one band applies to any
//! width, so resolution is constant across a band and can only change when
//! the viewport crosses a band boundary.

use crate::options::ParallaxOptions;

/// A responsive viewport-width band
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    /// width < 576
    Xs,
    /// 576 <= width <= 768
    Sm,
    /// 768 < width <= 1024
    Md,
    /// 1024 < width <= 1200
    Lg,
    /// 1200 < width <= 1920
    Xl,
    /// width > 1920
    Base,
}

impl Breakpoint {
    /// Classify a viewport width, first matching band wins
    pub fn for_width(width: f32) -> Self {
        if width < 576.0 {
            Breakpoint::Xs
        } else if width <= 768.0 {
            Breakpoint::Sm
        } else if width <= 1024.0 {
            Breakpoint::Md
        } else if width <= 1200.0 {
            Breakpoint::Lg
        } else if width <= 1920.0 {
            Breakpoint::Xl
        } else {
            Breakpoint::Base
        }
    }
}

/// Per-element factor overrides parsed from data attributes
///
/// Each slot is `None` when the attribute is absent. An attribute set to
/// exactly `0` is a configured value and wins over fallbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FactorOverrides {
    pub base: Option<f32>,
    pub xs: Option<f32>,
    pub sm: Option<f32>,
    pub md: Option<f32>,
    pub lg: Option<f32>,
    pub xl: Option<f32>,
}

impl FactorOverrides {
    fn band(&self, breakpoint: Breakpoint) -> Option<f32> {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Base => None,
        }
    }
}

fn option_band(options: &ParallaxOptions, breakpoint: Breakpoint) -> Option<f32> {
    match breakpoint {
        Breakpoint::Xs => options.factor_xs,
        Breakpoint::Sm => options.factor_sm,
        Breakpoint::Md => options.factor_md,
        Breakpoint::Lg => options.factor_lg,
        Breakpoint::Xl => options.factor_xl,
        Breakpoint::Base => None,
    }
}

/// Resolve the effective speed factor for a viewport width
///
/// Precedence within the matched band: element data override for the band,
/// then the configured band override, then the element's base override, then
/// the configured base factor. Always returns a number; with nothing
/// configured the element is inert (factor 0).
pub fn resolve_factor(overrides: &FactorOverrides, width: f32, options: &ParallaxOptions) -> f32 {
    let breakpoint = Breakpoint::for_width(width);
    let base = overrides.base.unwrap_or(options.factor);

    overrides
        .band(breakpoint)
        .or_else(|| option_band(options, breakpoint))
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_classification() {
        assert_eq!(Breakpoint::for_width(0.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(575.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(576.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(768.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(769.0), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1024.0), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1025.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1200.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1201.0), Breakpoint::Xl);
        assert_eq!(Breakpoint::for_width(1920.0), Breakpoint::Xl);
        assert_eq!(Breakpoint::for_width(1921.0), Breakpoint::Base);
    }

    #[test]
    fn test_constant_within_band() {
        let options = ParallaxOptions::new().factor(0.4).factor_md(0.7);
        let overrides = FactorOverrides::default();

        for width in [769.0, 800.0, 900.0, 1024.0] {
            assert_eq!(resolve_factor(&overrides, width, &options), 0.7);
        }
        // Crossing into Lg drops back to the base factor
        assert_eq!(resolve_factor(&overrides, 1025.0, &options), 0.4);
    }

    #[test]
    fn test_element_override_wins_over_options() {
        let options = ParallaxOptions::new().factor_sm(0.1);
        let overrides = FactorOverrides {
            sm: Some(0.3),
            ..Default::default()
        };

        assert_eq!(resolve_factor(&overrides, 700.0, &options), 0.3);
    }

    #[test]
    fn test_zero_is_a_configured_value() {
        // A band override of exactly 0 must not fall through to the base
        let options = ParallaxOptions::new().factor(0.9).factor_xs(0.0);
        let overrides = FactorOverrides::default();

        assert_eq!(resolve_factor(&overrides, 400.0, &options), 0.0);
    }

    #[test]
    fn test_element_base_override_beats_options_factor() {
        let options = ParallaxOptions::new().factor(0.2);
        let overrides = FactorOverrides {
            base: Some(0.8),
            ..Default::default()
        };

        // No band override configured anywhere - element base wins
        assert_eq!(resolve_factor(&overrides, 700.0, &options), 0.8);
        // Above 1920 only the base applies
        assert_eq!(resolve_factor(&overrides, 2500.0, &options), 0.8);
    }

    #[test]
    fn test_nothing_configured_is_inert() {
        let options = ParallaxOptions::default();
        let overrides = FactorOverrides::default();

        assert_eq!(resolve_factor(&overrides, 1000.0, &options), 0.0);
    }
}
