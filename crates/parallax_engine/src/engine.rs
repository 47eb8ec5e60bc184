//! Page coordinator and per-element scroll driver
//!
//! `ParallaxEngine` owns every binding on a page plus the single repaint
//! gate they share. The host forwards its resize/scroll/load events together
//! with fresh viewport readings; the engine recomputes offsets per binding
//! and writes styles for the bindings currently inside the viewport window.
//!
//! # Example
//!
//! ```ignore
//! use parallax_engine::{ParallaxEngine, ViewportMetrics};
//! use parallax_core::{ParallaxOptions, EffectType};
//!
//! let metrics = ViewportMetrics::new(1280.0, 800.0, 0.0);
//! let mut engine = ParallaxEngine::new(metrics);
//! let options = ParallaxOptions::new().factor(0.5).effect(EffectType::Foreground);
//!
//! let id = engine.bind(hero_banner, &options);
//!
//! // From the host's event dispatch:
//! engine.notify_scroll(current_metrics(), &mut raf);
//! engine.on_frame(); // when the requested frame fires
//! engine.unbind(id);
//! ```

use slotmap::{new_key_type, SlotMap};

use parallax_core::{
    background_offset, is_visible, resolve_factor, transform_offset, EffectType, ParallaxOptions,
};

use crate::applier;
use crate::binding::ElementBinding;
use crate::element::ParallaxElement;
use crate::gate::{FrameScheduler, RepaintGate};

new_key_type! {
    /// Handle to a bound element
    pub struct BindingId;
}

/// Fresh environment readings passed with each event notification
///
/// `width` and `scroll_top` are read per event; `height` is only consumed by
/// the engine constructor (the viewport height stays fixed for the engine's
/// lifetime) and is carried here for API symmetry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    /// Viewport inner width
    pub width: f32,
    /// Viewport inner height
    pub height: f32,
    /// Document scroll offset
    pub scroll_top: f32,
}

impl ViewportMetrics {
    pub fn new(width: f32, height: f32, scroll_top: f32) -> Self {
        Self {
            width,
            height,
            scroll_top,
        }
    }
}

/// The parallax engine for one page
///
/// Bindings register with [`bind`](Self::bind) and are driven until
/// [`unbind`](Self::unbind) releases them. All bindings share one repaint
/// gate, so one element's event handling absorbs another's frame request
/// until the frame fires.
pub struct ParallaxEngine<E> {
    bindings: SlotMap<BindingId, ElementBinding<E>>,
    /// Captured at construction, fixed thereafter
    viewport_height: f32,
    /// Last observed viewport width, used for bind-time resolution
    viewport_width: f32,
    gate: RepaintGate,
}

impl<E: ParallaxElement> ParallaxEngine<E> {
    /// Create an engine for a page with the given initial viewport readings
    pub fn new(viewport: ViewportMetrics) -> Self {
        Self {
            bindings: SlotMap::with_key(),
            viewport_height: viewport.height,
            viewport_width: viewport.width,
            gate: RepaintGate::new(),
        }
    }

    /// Number of live bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Whether a frame request is outstanding on the shared gate
    pub fn repaint_scheduled(&self) -> bool {
        self.gate.is_scheduled()
    }

    /// Borrow a bound element
    pub fn element(&self, id: BindingId) -> Option<&E> {
        self.bindings.get(id).map(|b| &b.element)
    }

    /// Mutably borrow a bound element
    pub fn element_mut(&mut self, id: BindingId) -> Option<&mut E> {
        self.bindings.get_mut(id).map(|b| &mut b.element)
    }

    /// Bind one element
    ///
    /// Captures geometry and the initial transform, resolves settings from
    /// data attributes over `options`, and applies the initial offset
    /// immediately so the element is positioned before any scroll occurs.
    /// The first non-zero foreground offset becomes the binding's anchor, so
    /// the element starts at its natural position (applied offset 0).
    pub fn bind(&mut self, element: E, options: &ParallaxOptions) -> BindingId {
        let mut binding = ElementBinding::capture(element, self.viewport_width, options);

        let factor = resolve_factor(&binding.overrides, binding.viewport_width, &binding.options);
        match binding.effect {
            EffectType::Background => {
                let offset = background_offset(binding.element_offset_top, factor);
                applier::apply_background(&mut binding.element, binding.direction, offset);
            }
            EffectType::Foreground => {
                let raw = transform_offset(
                    binding.element_offset_top,
                    factor,
                    self.viewport_height,
                    binding.element_height,
                );
                let offset = binding.anchor.adjust(raw);
                applier::apply_foreground(
                    &mut binding.element,
                    binding.direction,
                    offset,
                    &binding.transition,
                    &binding.initial_transform,
                );
            }
        }

        let id = self.bindings.insert(binding);
        tracing::debug!(?id, "bound parallax element");
        id
    }

    /// Bind a collection of elements with shared options
    pub fn bind_all(
        &mut self,
        elements: impl IntoIterator<Item = E>,
        options: &ParallaxOptions,
    ) -> Vec<BindingId> {
        elements
            .into_iter()
            .map(|element| self.bind(element, options))
            .collect()
    }

    /// Release a binding, returning the element to the host
    ///
    /// After this the element is no longer driven by any event. Returns
    /// `None` for a stale id.
    pub fn unbind(&mut self, id: BindingId) -> Option<E> {
        let binding = self.bindings.remove(id);
        if binding.is_some() {
            tracing::debug!(?id, "unbound parallax element");
        }
        binding.map(|b| b.element)
    }

    /// Handle a viewport resize
    ///
    /// Geometry changes discontinuously here, so visible bindings are reset
    /// before reapplying to keep a stale transition from animating the jump.
    pub fn notify_resize(&mut self, metrics: ViewportMetrics, scheduler: &mut dyn FrameScheduler) {
        self.viewport_width = metrics.width;
        let viewport_height = self.viewport_height;

        for (_, binding) in self.bindings.iter_mut() {
            binding.refresh_geometry(metrics.width);

            let factor =
                resolve_factor(&binding.overrides, binding.viewport_width, &binding.options);
            let bg_offset = background_offset(binding.element_offset_top, factor);
            let raw = transform_offset(
                binding.element_offset_top,
                factor,
                viewport_height,
                binding.element_height,
            );
            let fg_offset = binding.anchor.adjust(raw);

            self.gate.request(scheduler);

            if !is_visible(
                binding.element_offset_top,
                binding.element_height,
                metrics.scroll_top,
                viewport_height,
            ) {
                continue;
            }

            match binding.effect {
                EffectType::Background => {
                    applier::reset_background(&mut binding.element);
                    applier::apply_background(&mut binding.element, binding.direction, bg_offset);
                }
                EffectType::Foreground => {
                    applier::reset_foreground(&mut binding.element);
                    applier::apply_foreground(
                        &mut binding.element,
                        binding.direction,
                        fg_offset,
                        &binding.transition,
                        &binding.initial_transform,
                    );
                }
            }
        }
    }

    /// Handle a scroll event (also the load handler)
    ///
    /// Background offsets track the scroll-relative position
    /// (`offset_top - scroll_top`); foreground offsets couple the scroll
    /// position into the centering height term. Scroll is continuous, so
    /// writes overwrite in place without a reset.
    pub fn notify_scroll(&mut self, metrics: ViewportMetrics, scheduler: &mut dyn FrameScheduler) {
        let viewport_height = self.viewport_height;

        for (_, binding) in self.bindings.iter_mut() {
            let factor =
                resolve_factor(&binding.overrides, binding.viewport_width, &binding.options);
            let bg_offset =
                background_offset(binding.element_offset_top - metrics.scroll_top, factor);
            let raw = transform_offset(
                binding.element_offset_top,
                factor,
                viewport_height,
                binding.element_height - metrics.scroll_top,
            );
            let fg_offset = binding.anchor.adjust(raw);

            self.gate.request(scheduler);

            // Visibility reads fresh geometry, independent of the resize cache
            if !is_visible(
                binding.element.offset_top(),
                binding.element.outer_height(),
                metrics.scroll_top,
                viewport_height,
            ) {
                continue;
            }

            match binding.effect {
                EffectType::Background => {
                    applier::apply_background(&mut binding.element, binding.direction, bg_offset);
                }
                EffectType::Foreground => {
                    applier::apply_foreground(
                        &mut binding.element,
                        binding.direction,
                        fg_offset,
                        &binding.transition,
                        &binding.initial_transform,
                    );
                }
            }
        }
    }

    /// Handle the window load event (same computation as scroll)
    pub fn notify_load(&mut self, metrics: ViewportMetrics, scheduler: &mut dyn FrameScheduler) {
        self.notify_scroll(metrics, scheduler);
    }

    /// Clear the repaint gate; the host calls this when the requested
    /// animation frame fires
    pub fn on_frame(&mut self) {
        self.gate.on_frame();
    }
}
