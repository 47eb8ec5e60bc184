//! Parallax Core Primitives
//!
//! This crate provides the pure building blocks of the parallax engine:
//!
//! - **Options**: per-call configuration with per-breakpoint factor overrides
//! - **Breakpoints**: six-band viewport-width partition and factor resolution
//! - **Offsets**: background/transform offset arithmetic and the scroll anchor
//! - **Visibility**: the viewport-window predicate gating style writes
//! - **Style**: CSS property patches the engine emits through the host sink
//!
//! Everything here is a total function over numeric and string inputs; the
//! stateful per-element driver lives in `parallax_engine`.
//!
//! # Example
//!
//! ```rust
//! use parallax_core::{resolve_factor, background_offset, FactorOverrides, ParallaxOptions};
//!
//! let options = ParallaxOptions::new().factor(0.5).factor_sm(0.2);
//! let factor = resolve_factor(&FactorOverrides::default(), 700.0, &options);
//! assert_eq!(factor, 0.2);
//! assert_eq!(background_offset(400.0, factor), 80.0);
//! ```

pub mod breakpoint;
pub mod offset;
pub mod options;
pub mod style;
pub mod visibility;

pub use breakpoint::{resolve_factor, Breakpoint, FactorOverrides};
pub use offset::{background_offset, transform_offset, ScrollAnchor};
pub use options::{
    attr, AttrError, EffectType, ParallaxOptions, ScrollDirection, DEFAULT_TRANSITION,
};
pub use style::{
    background_position, reset_background, reset_foreground, translate, CssProperty, StylePatch,
    UNSET,
};
pub use visibility::is_visible;
