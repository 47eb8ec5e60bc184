//! Repaint gating
//!
//! One gate per engine, shared across every binding on the page: rapid-fire
//! scroll and resize events collapse into at most one outstanding
//! animation-frame request. The gate throttles frame requests only - style
//! writes still happen synchronously inside each event.

/// The environment's animation-frame scheduling primitive
///
/// Hosts are expected to call [`RepaintGate::on_frame`] (via the engine) when
/// the requested frame fires.
pub trait FrameScheduler {
    /// Request a single animation-frame callback
    fn request_frame(&mut self);
}

/// Coalesces frame requests across all bindings
///
/// Check-and-set: the first event after a frame requests the next one, later
/// events in the same frame window are absorbed.
#[derive(Debug, Default)]
pub struct RepaintGate {
    scheduled: bool,
}

impl RepaintGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a frame request is outstanding
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Request a repaint, forwarding to the scheduler at most once per frame
    pub fn request(&mut self, scheduler: &mut dyn FrameScheduler) {
        if !self.scheduled {
            self.scheduled = true;
            scheduler.request_frame();
        }
    }

    /// Clear the gate; called when the requested frame fires
    pub fn on_frame(&mut self) {
        self.scheduled = false;
    }
}
