use eframe::egui::{self, Align2, Color32, FontId, Painter, StrokeKind, Vec2, text::LayoutJob};

use super::error::OverlayError;
use super::host::TextMeasurer;
use super::screen::ScreenShape;

/// Paint resolved overlay shapes. Text is anchored at its top-left corner.
pub fn paint(painter: &Painter, shapes: &[ScreenShape]) {
    for shape in shapes {
        match shape {
            ScreenShape::RoundedRect {
                rect,
                corner_radius,
                fill,
                stroke,
            } => {
                painter.rect(*rect, *corner_radius, *fill, *stroke, StrokeKind::Inside);
            }
            ScreenShape::Text {
                text,
                pos,
                font_size,
                color,
            } => {
                painter.text(
                    *pos,
                    Align2::LEFT_TOP,
                    text,
                    FontId::proportional(*font_size),
                    *color,
                );
            }
        }
    }
}

/// Measures overlay text with the egui font system of a live context.
#[derive(Clone)]
pub struct EguiTextMeasurer {
    ctx: egui::Context,
}

impl EguiTextMeasurer {
    pub fn new(ctx: &egui::Context) -> Self {
        Self { ctx: ctx.clone() }
    }
}

impl TextMeasurer for EguiTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> Result<Vec2, OverlayError> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(OverlayError::Measure {
                text: text.to_string(),
                message: format!("font size {font_size} is not positive"),
            });
        }
        let galley = self.ctx.fonts_mut(|fonts| {
            fonts.layout_job(LayoutJob::simple_singleline(
                text.to_string(),
                FontId::proportional(font_size),
                Color32::WHITE,
            ))
        });
        Ok(galley.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{LayerId, Rect, Stroke, pos2, vec2};

    #[test]
    fn larger_font_measures_larger() {
        let ctx = egui::Context::default();
        let mut sizes = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let measurer = EguiTextMeasurer::new(ctx);
            sizes = Some((
                measurer.measure("Loading...", 30.0).unwrap(),
                measurer.measure("Loading...", 60.0).unwrap(),
            ));
        });
        let (small, large) = sizes.unwrap();
        assert!(small.x > 0.0 && small.y > 0.0);
        assert!(large.x > small.x);
        assert!(large.y > small.y);
    }

    #[test]
    fn zero_font_size_is_a_measure_error() {
        let ctx = egui::Context::default();
        let measurer = EguiTextMeasurer::new(&ctx);
        assert!(matches!(
            measurer.measure("Loading...", 0.0),
            Err(OverlayError::Measure { .. })
        ));
    }

    #[test]
    fn paints_one_shape_per_screen_shape() {
        let ctx = egui::Context::default();
        let shapes = vec![
            ScreenShape::RoundedRect {
                rect: Rect::from_min_size(pos2(20.0, 20.0), vec2(60.0, 60.0)),
                corner_radius: 10.0,
                fill: Color32::from_black_alpha(150),
                stroke: Stroke::new(1.0, Color32::BLACK),
            },
            ScreenShape::Text {
                text: "00:01:23".to_string(),
                pos: pos2(30.0, 40.0),
                font_size: 30.0,
                color: Color32::WHITE,
            },
        ];
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            paint(&ctx.layer_painter(LayerId::background()), &shapes);
        });
        assert_eq!(output.shapes.len(), 2);
    }
}
