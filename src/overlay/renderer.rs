//! The loading/elapsed-time overlay painted over the waveform canvas.
//!
//! The host surface may be magnified. Text is laid out at `font_size * zoom`
//! and drawn through a `1 / zoom` transform: glyphs are rasterized at the
//! magnified size yet always measure `font_size` in surface units, so the
//! message keeps its proportions inside the box at every zoom level.

use std::sync::Arc;

use egui::Vec2;

use super::commands::{DrawCommand, DrawList};
use super::error::OverlayError;
use super::geometry::{FrameGeometry, OverlayMetrics};
use super::host::{ElapsedTimeSource, Localizer, OverlayHost, StyleSettings, TextMeasurer};
use super::paint::PaintResources;
use super::transform::{CompensatingTransform, TransformCache};

/// Which message the overlay shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Loading,
    ElapsedTime,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Ambient magnification together with the transform that cancels it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Compensation {
    pub magnification: f32,
    /// `None` when the magnification rounds to 1.000.
    pub transform: Option<CompensatingTransform>,
}

impl Compensation {
    pub fn is_active(&self) -> bool {
        self.transform.is_some()
    }
}

/// Collaborators read during one render pass.
#[derive(Clone, Copy)]
pub struct FrameInputs<'a> {
    pub host: &'a dyn OverlayHost,
    pub style: &'a dyn StyleSettings,
    pub elapsed: &'a dyn ElapsedTimeSource,
    pub localizer: &'a dyn Localizer,
    pub measurer: &'a dyn TextMeasurer,
}

/// Produces the overlay draw commands for each repaint of the host.
#[derive(Debug)]
pub struct OverlayRenderer {
    metrics: OverlayMetrics,
    paint: Arc<PaintResources>,
    transforms: TransformCache,
    display_mode: DisplayMode,
    visibility: Visibility,
}

impl OverlayRenderer {
    /// Create a hidden overlay in loading mode with brushes built from `style`.
    pub fn new(style: &dyn StyleSettings, metrics: OverlayMetrics) -> Result<Self, OverlayError> {
        Ok(Self {
            metrics,
            paint: PaintResources::from_style(style)?,
            transforms: TransformCache::default(),
            display_mode: DisplayMode::default(),
            visibility: Visibility::default(),
        })
    }

    /// Rebuild every paint resource from the current style settings.
    ///
    /// Style changes made after this call stay invisible until it is called
    /// again. On error the previous resources remain in place.
    pub fn reset_brushes(&mut self, style: &dyn StyleSettings) -> Result<(), OverlayError> {
        self.paint = PaintResources::from_style(style)?;
        tracing::debug!(fill = ?self.paint.fill, text = ?self.paint.text_color, "Overlay brushes reset");
        Ok(())
    }

    /// Read the ambient magnification and return the transform cancelling it.
    ///
    /// Falls back to the style's default magnification when the host reports
    /// none.
    pub fn compute_compensating_transform(
        &mut self,
        host: &dyn OverlayHost,
        style: &dyn StyleSettings,
    ) -> Result<Compensation, OverlayError> {
        let magnification = host
            .magnification()
            .or_else(|| style.default_magnification())
            .ok_or(OverlayError::MissingMagnification)?;
        if !magnification.is_finite() || magnification <= 0.0 {
            return Err(OverlayError::InvalidMagnification(magnification));
        }
        Ok(Compensation {
            magnification,
            transform: self.transforms.resolve(magnification).copied(),
        })
    }

    /// Draw commands for the current frame.
    ///
    /// Hidden overlays and surfaces too small to fit the margins yield an
    /// empty list.
    pub fn render(&mut self, inputs: FrameInputs<'_>) -> Result<DrawList, OverlayError> {
        let mut list = DrawList::default();
        if self.visibility == Visibility::Hidden {
            return Ok(list);
        }
        let paint = Arc::clone(&self.paint);
        let compensation = self.compute_compensating_transform(inputs.host, inputs.style)?;
        let zoom = compensation.magnification;

        let text = match self.display_mode {
            DisplayMode::ElapsedTime => inputs.elapsed.elapsed_time_text(),
            DisplayMode::Loading => inputs.localizer.loading_label(),
        };
        let font_size = if compensation.is_active() {
            self.metrics.font_size * zoom
        } else {
            self.metrics.font_size
        };
        let text_size = layout_footprint(inputs.measurer.measure(&text, font_size)?, &compensation);

        let surface = inputs.host.surface_size();
        let Some(geometry) = FrameGeometry::compute(surface, text_size, self.metrics.margin) else {
            tracing::trace!(?surface, margin = self.metrics.margin, "Overlay skipped: surface too small");
            return Ok(list);
        };

        list.push(DrawCommand::RoundedRect {
            rect: geometry.message_rect,
            corner_radius: self.metrics.corner_radius,
            fill: paint.fill,
            stroke: paint.border,
        });

        let mut anchor = geometry.text_anchor;
        if compensation.is_active() {
            anchor = (anchor.to_vec2() * zoom).to_pos2();
        }
        let text_command = DrawCommand::Text {
            text,
            anchor,
            font_size,
            color: paint.text_color,
        };
        match compensation.transform {
            Some(transform) => {
                list.push(DrawCommand::PushTransform {
                    scale: transform.scale(),
                });
                list.push(text_command);
                list.push(DrawCommand::PopTransform);
            }
            None => list.push(text_command),
        }
        Ok(list)
    }

    /// Show the loading label with freshly read colors.
    ///
    /// Every transition returns `true` when the host should repaint.
    pub fn show_loading(&mut self, style: &dyn StyleSettings) -> Result<bool, OverlayError> {
        self.reset_brushes(style)?;
        self.display_mode = DisplayMode::Loading;
        self.visibility = Visibility::Visible;
        Ok(true)
    }

    pub fn hide_loading(&mut self) -> bool {
        self.set_visibility(Visibility::Hidden)
    }

    /// Switch to the elapsed recording time.
    pub fn show_elapsed_time(&mut self) -> bool {
        self.display_mode = DisplayMode::ElapsedTime;
        self.visibility = Visibility::Visible;
        true
    }

    /// Hide the elapsed time and fall back to loading mode.
    pub fn hide_elapsed_time(&mut self) -> bool {
        self.display_mode = DisplayMode::Loading;
        self.set_visibility(Visibility::Hidden)
    }

    /// The elapsed time text changed; make sure it is visible and repainted.
    pub fn refresh_elapsed_time(&mut self) -> bool {
        self.visibility = Visibility::Visible;
        true
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn metrics(&self) -> OverlayMetrics {
        self.metrics
    }

    /// Shared handle to the current frozen paint resources.
    pub fn paint(&self) -> Arc<PaintResources> {
        Arc::clone(&self.paint)
    }

    /// How many times the cached compensating transform has been rewritten.
    pub fn transform_updates(&self) -> u64 {
        self.transforms.updates()
    }

    fn set_visibility(&mut self, visibility: Visibility) -> bool {
        let changed = self.visibility != visibility;
        self.visibility = visibility;
        changed
    }
}

/// Text footprint in surface units, as used for layout, for a given zoom.
pub fn layout_footprint(measured: Vec2, compensation: &Compensation) -> Vec2 {
    if compensation.is_active() {
        measured / compensation.magnification
    } else {
        measured
    }
}
