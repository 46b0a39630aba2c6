use egui::{Pos2, Rect, Vec2, pos2};

/// Fixed sizes of the overlay, in surface units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayMetrics {
    /// Gap between the surface edges and the message box on every side.
    pub margin: f32,
    pub corner_radius: f32,
    /// Font size of the message in surface units, whatever the magnification.
    pub font_size: f32,
}

impl Default for OverlayMetrics {
    fn default() -> Self {
        Self {
            margin: 20.0,
            corner_radius: 10.0,
            font_size: 30.0,
        }
    }
}

/// Message box and text position for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    pub message_rect: Rect,
    /// Top-left corner of the text, in surface units.
    pub text_anchor: Pos2,
}

impl FrameGeometry {
    /// Lay out the overlay on a `surface` with a text block of `text_size`.
    ///
    /// Returns `None` when the margins leave no room for a message box.
    pub fn compute(surface: Vec2, text_size: Vec2, margin: f32) -> Option<Self> {
        if surface.x <= margin * 2.0 || surface.y <= margin * 2.0 {
            return None;
        }
        let message_rect = Rect::from_min_max(
            pos2(margin, margin),
            pos2(surface.x - margin, surface.y - margin),
        );
        let center = message_rect.center();
        Some(Self {
            message_rect,
            text_anchor: center - text_size * 0.5,
        })
    }
}
