//! Resolve overlay commands into screen space.
//!
//! The host draws everything on its surface magnified by the ambient zoom.
//! Walking the command list with a scale stack that starts at that zoom
//! reproduces what a retained-mode drawing context would do with the pushed
//! transforms.

use egui::{Color32, Pos2, Rect, Stroke};

use super::commands::{DrawCommand, DrawList};
use super::error::OverlayError;

#[derive(Clone, Debug, PartialEq)]
pub enum ScreenShape {
    RoundedRect {
        rect: Rect,
        corner_radius: f32,
        fill: Color32,
        stroke: Stroke,
    },
    Text {
        text: String,
        pos: Pos2,
        font_size: f32,
        color: Color32,
    },
}

/// Map `list` onto a surface placed at `origin` and magnified by `ambient`.
pub fn resolve(list: &DrawList, ambient: f32, origin: Pos2) -> Result<Vec<ScreenShape>, OverlayError> {
    let mut scales = vec![ambient];
    let mut shapes = Vec::with_capacity(list.len());
    for command in list {
        let scale = scales.last().copied().unwrap_or(ambient);
        let to_screen = |pos: Pos2| origin + pos.to_vec2() * scale;
        match command {
            DrawCommand::PushTransform { scale: pushed } => scales.push(scale * pushed),
            DrawCommand::PopTransform => {
                if scales.len() == 1 {
                    return Err(OverlayError::UnbalancedTransform);
                }
                scales.pop();
            }
            DrawCommand::RoundedRect {
                rect,
                corner_radius,
                fill,
                stroke,
            } => shapes.push(ScreenShape::RoundedRect {
                rect: Rect::from_min_max(to_screen(rect.min), to_screen(rect.max)),
                corner_radius: corner_radius * scale,
                fill: *fill,
                stroke: Stroke::new(stroke.width * scale, stroke.color),
            }),
            DrawCommand::Text {
                text,
                anchor,
                font_size,
                color,
            } => shapes.push(ScreenShape::Text {
                text: text.clone(),
                pos: to_screen(*anchor),
                font_size: font_size * scale,
                color: *color,
            }),
        }
    }
    Ok(shapes)
}
