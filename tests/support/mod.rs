//! Fakes shared by the overlay integration tests.
#![allow(dead_code)]

pub mod config_home;

use std::cell::RefCell;

use egui::{Vec2, vec2};
use waveform_overlay::overlay::{ElapsedTimeSource, OverlayError, OverlayHost, TextMeasurer};

/// Canvas with a fixed size and an adjustable zoom.
pub struct FakeCanvas {
    pub zoom: Option<f32>,
    pub size: Vec2,
}

impl FakeCanvas {
    pub fn new(zoom: f32, width: f32, height: f32) -> Self {
        Self {
            zoom: Some(zoom),
            size: vec2(width, height),
        }
    }
}

impl OverlayHost for FakeCanvas {
    fn magnification(&self) -> Option<f32> {
        self.zoom
    }

    fn surface_size(&self) -> Vec2 {
        self.size
    }
}

/// Glyphs are `0.6 * size` wide and `1.2 * size` tall, like a typical UI font.
pub struct ProportionalMeasurer;

impl TextMeasurer for ProportionalMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> Result<Vec2, OverlayError> {
        let glyphs = text.chars().count() as f32;
        Ok(vec2(glyphs * font_size * 0.6, font_size * 1.2))
    }
}

/// Elapsed time text set directly by the test.
#[derive(Default)]
pub struct FixedElapsed(pub RefCell<String>);

impl FixedElapsed {
    pub fn new(text: &str) -> Self {
        Self(RefCell::new(text.to_string()))
    }
}

impl ElapsedTimeSource for FixedElapsed {
    fn elapsed_time_text(&self) -> String {
        self.0.borrow().clone()
    }
}
