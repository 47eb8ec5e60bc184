//! Parallax Engine
//!
//! Scroll-driven parallax for host-provided elements: background images
//! shifting at a fraction of scroll speed, or foreground elements translated
//! as the viewport scrolls.
//!
//! The engine is a pure function of (scroll position, viewport size, element
//! geometry, configuration) into CSS property values, invoked reactively.
//! Hosts supply three seams:
//!
//! - [`ParallaxElement`] - geometry readings, data attributes, and the
//!   opaque "set these CSS properties" style sink
//! - [`FrameScheduler`] - the environment's animation-frame primitive
//! - event forwarding - the host calls `notify_resize` / `notify_scroll` /
//!   `notify_load` from its own dispatch, with fresh [`ViewportMetrics`]
//!
//! Pure arithmetic (breakpoints, offsets, visibility, style strings) lives
//! in `parallax_core`; this crate adds the per-element state and lifecycle.

pub mod applier;
pub mod binding;
pub mod element;
pub mod engine;
pub mod gate;

#[cfg(test)]
mod test_util;

pub use binding::ElementBinding;
pub use element::{resolve_settings, ParallaxElement, ResolvedSettings};
pub use engine::{BindingId, ParallaxEngine, ViewportMetrics};
pub use gate::{FrameScheduler, RepaintGate};

// Re-export the core vocabulary so hosts need a single dependency
pub use parallax_core::{
    AttrError, EffectType, ParallaxOptions, ScrollDirection, StylePatch,
};
