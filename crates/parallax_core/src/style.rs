//! Style model
//!
//! The engine's only output: small batches of CSS property writes handed to
//! the host's style sink. Builders here are pure string formatting; applying
//! a patch to an actual element is the host's concern.

use smallvec::SmallVec;

use crate::options::ScrollDirection;

/// CSS properties the engine mutates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CssProperty {
    BackgroundPosition,
    Transform,
    Transition,
    /// Compositor hint (`will-change`)
    WillChange,
}

impl CssProperty {
    /// The CSS property name as written in a stylesheet
    pub fn name(&self) -> &'static str {
        match self {
            CssProperty::BackgroundPosition => "background-position",
            CssProperty::Transform => "transform",
            CssProperty::Transition => "transition",
            CssProperty::WillChange => "will-change",
        }
    }
}

/// A batch of property writes applied to one element in one event
pub type StylePatch = SmallVec<[(CssProperty, String); 4]>;

/// Sentinel clearing a property back to its unset state
pub const UNSET: &str = "unset";

fn px(offset: f32) -> i64 {
    offset as i64
}

/// Background-position value for a computed offset
///
/// The offset sign is flipped: a positive parallax offset shifts the image
/// up (vertical) or left (horizontal).
pub fn background_position(direction: ScrollDirection, offset: f32) -> StylePatch {
    let value = match direction {
        ScrollDirection::Vertical => format!("center {}px", px(-offset)),
        ScrollDirection::Horizontal => format!("{}px center", px(-offset)),
    };

    let mut patch = StylePatch::new();
    patch.push((CssProperty::BackgroundPosition, value));
    patch
}

/// Transform, transition, and compositor hint for a foreground offset
///
/// `base_transform` is the element's transform captured at bind time and is
/// appended so pre-existing transforms survive; the `"none"` sentinel is
/// treated as empty rather than concatenated literally.
pub fn translate(
    direction: ScrollDirection,
    offset: f32,
    transition: &str,
    base_transform: &str,
) -> StylePatch {
    let base = if base_transform == "none" {
        ""
    } else {
        base_transform
    };
    let value = match direction {
        ScrollDirection::Vertical => format!("translate(0, {}px){}", px(offset), base),
        ScrollDirection::Horizontal => format!("translate({}px, 0){}", px(offset), base),
    };

    let mut patch = StylePatch::new();
    patch.push((CssProperty::Transform, value));
    patch.push((CssProperty::Transition, transition.to_string()));
    patch.push((CssProperty::WillChange, "transform".to_string()));
    patch
}

/// Clear background styling back to unset
pub fn reset_background() -> StylePatch {
    let mut patch = StylePatch::new();
    patch.push((CssProperty::BackgroundPosition, UNSET.to_string()));
    patch
}

/// Clear foreground transform and transition back to unset
pub fn reset_foreground() -> StylePatch {
    let mut patch = StylePatch::new();
    patch.push((CssProperty::Transform, UNSET.to_string()));
    patch.push((CssProperty::Transition, UNSET.to_string()));
    patch
}
