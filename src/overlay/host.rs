//! Narrow capabilities the overlay reads from its surroundings.
//!
//! The renderer never sees the hosting view itself. Each collaborator is a
//! small trait so the waveform canvas, the recorder view-model, the settings
//! store and the font system can be swapped independently (and faked in tests).

use std::fmt;

use egui::{Color32, Vec2};

use super::error::{OverlayError, StyleError};

/// Read-only view of the surface the overlay is drawn on.
pub trait OverlayHost {
    /// Ambient zoom applied to the surface, if the host currently knows it.
    fn magnification(&self) -> Option<f32>;
    /// Current size of the adorned surface in unmagnified units.
    fn surface_size(&self) -> Vec2;
}

/// Supplies the elapsed recording time already formatted for display.
pub trait ElapsedTimeSource {
    fn elapsed_time_text(&self) -> String;
}

/// Named colors the overlay is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// Message box fill and border.
    Background,
    /// Message text.
    Text,
}

impl StyleKey {
    /// Settings name of the color.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleKey::Background => "background",
            StyleKey::Text => "text",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style store the paint resources are snapshotted from.
pub trait StyleSettings {
    fn color(&self, key: StyleKey) -> Result<Color32, StyleError>;
    /// Magnification assumed when the host cannot report one.
    fn default_magnification(&self) -> Option<f32>;
}

/// Localized strings shown by the overlay.
pub trait Localizer {
    fn loading_label(&self) -> String;
}

/// Text layout used to size the message before it is drawn.
pub trait TextMeasurer {
    /// Laid-out size of `text` at `font_size`, in the units it will be drawn in.
    fn measure(&self, text: &str, font_size: f32) -> Result<Vec2, OverlayError>;
}
