//! Parallax configuration
//!
//! `ParallaxOptions` is the per-call configuration merged over defaults at
//! bind time. Per-element data attributes (the `parallax-*` keys) override
//! these values when present; absence falls back to the option, then to the
//! unscoped base `factor`.
//!
//! # Example
//!
//! ```rust
//! use parallax_core::{ParallaxOptions, EffectType, ScrollDirection};
//!
//! let options = ParallaxOptions::new()
//!     .factor(0.5)
//!     .factor_sm(0.2)
//!     .effect(EffectType::Foreground)
//!     .direction(ScrollDirection::Horizontal);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Data attribute keys recognized on bound elements
pub mod attr {
    pub const FACTOR: &str = "parallax-factor";
    pub const FACTOR_XS: &str = "parallax-factor-xs";
    pub const FACTOR_SM: &str = "parallax-factor-sm";
    pub const FACTOR_MD: &str = "parallax-factor-md";
    pub const FACTOR_LG: &str = "parallax-factor-lg";
    pub const FACTOR_XL: &str = "parallax-factor-xl";
    pub const TYPE: &str = "parallax-type";
    pub const DIRECTION: &str = "parallax-direction";
    pub const TRANSITION: &str = "parallax-transition";
}

/// Error produced when a data attribute value cannot be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttrError {
    #[error("unknown parallax type '{0}' (expected 'background' or 'foreground')")]
    UnknownEffectType(String),
    #[error("unknown parallax direction '{0}' (expected 'vertical' or 'horizontal')")]
    UnknownDirection(String),
    #[error("invalid parallax factor '{0}' (expected a number)")]
    InvalidFactor(String),
}

/// How the parallax offset is applied to the element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectType {
    /// Shift the element's background image position
    #[default]
    Background,
    /// Translate the element itself via a 2D transform
    Foreground,
}

impl FromStr for EffectType {
    type Err = AttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "background" => Ok(EffectType::Background),
            "foreground" => Ok(EffectType::Foreground),
            other => Err(AttrError::UnknownEffectType(other.to_string())),
        }
    }
}

/// Axis along which the offset is applied
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Vertical,
    Horizontal,
}

impl FromStr for ScrollDirection {
    type Err = AttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(ScrollDirection::Vertical),
            "horizontal" => Ok(ScrollDirection::Horizontal),
            other => Err(AttrError::UnknownDirection(other.to_string())),
        }
    }
}

/// Default CSS transition applied to foreground transforms
pub const DEFAULT_TRANSITION: &str = "transform .2s ease";

/// Configuration for parallax behavior
///
/// All per-breakpoint factors are optional; a configured value of exactly
/// `0.0` is a valid factor (element pinned static in that band), distinct
/// from the unset `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxOptions {
    /// Base speed factor, used when no breakpoint override applies (default 0)
    pub factor: f32,
    /// Factor override for viewports narrower than 576px
    pub factor_xs: Option<f32>,
    /// Factor override for viewports 576-768px
    pub factor_sm: Option<f32>,
    /// Factor override for viewports 768-1024px
    pub factor_md: Option<f32>,
    /// Factor override for viewports 1024-1200px
    pub factor_lg: Option<f32>,
    /// Factor override for viewports 1200-1920px
    pub factor_xl: Option<f32>,
    /// CSS transition applied alongside foreground transforms
    pub transition: String,
    /// Background-position vs. transform effect
    pub effect: EffectType,
    /// Vertical vs. horizontal offset axis
    pub direction: ScrollDirection,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            factor: 0.0,
            factor_xs: None,
            factor_sm: None,
            factor_md: None,
            factor_lg: None,
            factor_xl: None,
            transition: DEFAULT_TRANSITION.to_string(),
            effect: EffectType::Background,
            direction: ScrollDirection::Vertical,
        }
    }
}

impl ParallaxOptions {
    /// Create options with all defaults (factor 0 - no movement)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base speed factor
    pub fn factor(mut self, factor: f32) -> Self {
        self.factor = factor;
        self
    }

    /// Set the extra-small breakpoint factor (width < 576)
    pub fn factor_xs(mut self, factor: f32) -> Self {
        self.factor_xs = Some(factor);
        self
    }

    /// Set the small breakpoint factor (576 <= width <= 768)
    pub fn factor_sm(mut self, factor: f32) -> Self {
        self.factor_sm = Some(factor);
        self
    }

    /// Set the medium breakpoint factor (768 < width <= 1024)
    pub fn factor_md(mut self, factor: f32) -> Self {
        self.factor_md = Some(factor);
        self
    }

    /// Set the large breakpoint factor (1024 < width <= 1200)
    pub fn factor_lg(mut self, factor: f32) -> Self {
        self.factor_lg = Some(factor);
        self
    }

    /// Set the extra-large breakpoint factor (1200 < width <= 1920)
    pub fn factor_xl(mut self, factor: f32) -> Self {
        self.factor_xl = Some(factor);
        self
    }

    /// Set the transition string for foreground transforms
    pub fn transition(mut self, transition: impl Into<String>) -> Self {
        self.transition = transition.into();
        self
    }

    /// Set the effect type (background vs. foreground)
    pub fn effect(mut self, effect: EffectType) -> Self {
        self.effect = effect;
        self
    }

    /// Set the offset axis
    pub fn direction(mut self, direction: ScrollDirection) -> Self {
        self.direction = direction;
        self
    }
}
