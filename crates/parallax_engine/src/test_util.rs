//! Shared test doubles for the engine crate

use parallax_core::{CssProperty, StylePatch};

use crate::element::ParallaxElement;
use crate::gate::FrameScheduler;

/// In-memory element recording every style patch applied to it
#[derive(Clone, Debug)]
pub struct MockElement {
    pub offset_top: f32,
    pub outer_height: f32,
    pub attrs: Vec<(String, String)>,
    pub transform: String,
    pub patches: Vec<StylePatch>,
}

impl MockElement {
    pub fn new(offset_top: f32, outer_height: f32) -> Self {
        Self {
            offset_top,
            outer_height,
            attrs: Vec::new(),
            transform: "none".to_string(),
            patches: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.retain(|(k, _)| k != key);
        self.attrs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_transform(mut self, transform: &str) -> Self {
        self.transform = transform.to_string();
        self
    }

    /// Most recent value written for a property, across all patches
    pub fn last_value(&self, property: CssProperty) -> Option<String> {
        self.patches
            .iter()
            .rev()
            .flat_map(|patch| patch.iter().rev())
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.clone())
    }
}

impl ParallaxElement for MockElement {
    fn offset_top(&self) -> f32 {
        self.offset_top
    }

    fn outer_height(&self) -> f32 {
        self.outer_height
    }

    fn data_attr(&self, key: &str) -> Option<String> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn current_transform(&self) -> String {
        self.transform.clone()
    }

    fn apply_styles(&mut self, patch: &StylePatch) {
        self.patches.push(patch.clone());
    }
}

/// Frame scheduler counting requests
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    pub requests: usize,
}

impl FrameScheduler for RecordingScheduler {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}
