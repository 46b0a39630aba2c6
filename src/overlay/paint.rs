use std::sync::Arc;

use egui::{Color32, Stroke};

use super::error::StyleError;
use super::host::{StyleKey, StyleSettings};

/// Opacity of the message box fill.
pub const FILL_OPACITY: f32 = 0.6;
/// Width of the message box border.
pub const STROKE_WIDTH: f32 = 1.0;

/// Colors and strokes snapshotted from the style settings.
///
/// Never mutated after construction; a style change builds a new value.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintResources {
    pub fill: Color32,
    pub border: Stroke,
    /// Glyph color; egui fills glyphs, so the text needs no separate pen.
    pub text_color: Color32,
}

impl PaintResources {
    /// Read the overlay colors and build a frozen, shareable snapshot.
    pub fn from_style(style: &dyn StyleSettings) -> Result<Arc<Self>, StyleError> {
        let background = style.color(StyleKey::Background)?;
        let text = style.color(StyleKey::Text)?;
        Ok(Arc::new(Self {
            fill: background.gamma_multiply(FILL_OPACITY),
            border: Stroke::new(STROKE_WIDTH, background),
            text_color: text,
        }))
    }
}
