//! Offset arithmetic
//!
//! Pure functions computing the pixel offsets the applier writes out, plus
//! the `ScrollAnchor` baseline that keeps foreground transforms relative to
//! the scroll position observed at bind time.
//!
//! Both offset functions round to the nearest integer pixel, ties away from
//! zero. With a factor of 0 they return 0 regardless of geometry, so an
//! unconfigured element never moves.

/// Background offset: the scroll-anchored position scaled by the factor
pub fn background_offset(position: f32, factor: f32) -> f32 {
    (position * factor).round()
}

/// Foreground transform offset
///
/// The `element_height / 2` term centers the parallax curve on the element's
/// midpoint, so a factor of 1 tracks native scroll exactly at the center.
pub fn transform_offset(
    position: f32,
    factor: f32,
    viewport_height: f32,
    element_height: f32,
) -> f32 {
    ((position - element_height / 2.0 + viewport_height) * factor).round()
}

/// Set-once baseline for foreground transform offsets
///
/// The first non-zero raw offset a binding computes becomes its anchor; every
/// later offset is reported relative to it. This keeps the element at its
/// natural position at bind time (effective offset 0) and only moves it for
/// scroll that happens afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollAnchor {
    baseline: Option<f32>,
}

impl ScrollAnchor {
    /// Create an unset anchor
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the baseline has been captured
    pub fn is_set(&self) -> bool {
        self.baseline.is_some()
    }

    /// The captured baseline, if any
    pub fn baseline(&self) -> Option<f32> {
        self.baseline
    }

    /// Adjust a raw offset against the baseline
    ///
    /// Unset anchor: captures `raw` as the baseline (if non-zero) and
    /// reports 0 for this call. Set anchor: reports `raw - baseline`. The
    /// baseline is never reassigned once captured.
    pub fn adjust(&mut self, raw: f32) -> f32 {
        match self.baseline {
            Some(baseline) => raw - baseline,
            None => {
                if raw != 0.0 {
                    self.baseline = Some(raw);
                }
                0.0
            }
        }
    }
}
