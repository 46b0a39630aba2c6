//! eframe host for the overlay: a magnifiable waveform canvas with controls
//! for loading, recording and zoom.

use std::time::Instant;

use eframe::egui::{self, Color32, Pos2, Rect, RichText, Sense, Shape, Stroke, Vec2, pos2};

use crate::overlay::egui_paint::{self, EguiTextMeasurer};
use crate::overlay::screen;
use crate::overlay::{FrameInputs, OverlayError, OverlayHost, OverlayRenderer};
use crate::recording_clock::RecordingClock;
use crate::settings::{self, OverlaySettings};

/// Smallest window that still leaves room for the controls.
pub const MIN_VIEWPORT_SIZE: Vec2 = egui::vec2(480.0, 320.0);

const ZOOM_RANGE: std::ops::RangeInclusive<f32> = 0.5..=3.0;
const WAVE_CYCLES: f32 = 9.0;
const WAVE_POINTS: usize = 400;

/// What the canvas exposes to the overlay during one paint pass.
struct CanvasSurface {
    magnification: Option<f32>,
    size: Vec2,
}

impl OverlayHost for CanvasSurface {
    fn magnification(&self) -> Option<f32> {
        self.magnification
    }

    fn surface_size(&self) -> Vec2 {
        self.size
    }
}

pub struct OverlayDemoApp {
    settings: OverlaySettings,
    overlay: OverlayRenderer,
    clock: RecordingClock,
    zoom: f32,
    /// When off the canvas reports no zoom and the settings default applies.
    report_zoom: bool,
    loading: bool,
    status: Option<String>,
    /// Last overlay render error; cleared by the next good frame.
    render_failure: Option<String>,
}

impl OverlayDemoApp {
    pub fn new(settings: OverlaySettings) -> Result<Self, OverlayError> {
        let overlay = OverlayRenderer::new(&settings, settings.display.metrics())?;
        Ok(Self {
            settings,
            overlay,
            clock: RecordingClock::default(),
            zoom: 1.0,
            report_zoom: true,
            loading: false,
            status: None,
            render_failure: None,
        })
    }

    fn render_controls(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("overlay_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let loading_label = if self.loading { "Finish loading" } else { "Load waveform" };
                if ui.button(loading_label).clicked() {
                    self.toggle_loading(ctx);
                }
                let record_label = if self.clock.is_running() { "Stop" } else { "Record" };
                if ui.button(record_label).clicked() {
                    self.toggle_recording(ctx);
                }
                if ui.button("Reload style").clicked() {
                    self.reload_style(ctx);
                }
                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, ZOOM_RANGE).text("Zoom"));
                ui.checkbox(&mut self.report_zoom, "Report zoom");
            });
        });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("overlay_status").show(ctx, |ui| {
            let status = self.status_text();
            let text = status.unwrap_or("Ready");
            let color = if status.is_some() {
                Color32::from_rgb(200, 128, 96)
            } else {
                Color32::from_rgb(140, 146, 155)
            };
            ui.label(RichText::new(text).color(color));
        });
    }

    fn render_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
            let rect = response.rect;
            let painter = painter.with_clip_rect(rect);
            painter.rect_filled(rect, 0.0, Color32::from_rgb(10, 10, 12));
            paint_waveform(&painter, rect, self.zoom);

            let surface = CanvasSurface {
                magnification: self.report_zoom.then_some(self.zoom),
                size: rect.size() / self.zoom,
            };
            let measurer = EguiTextMeasurer::new(ui.ctx());
            let result = self
                .overlay
                .render(FrameInputs {
                    host: &surface,
                    style: &self.settings,
                    elapsed: &self.clock,
                    localizer: &self.settings,
                    measurer: &measurer,
                })
                .and_then(|list| screen::resolve(&list, self.zoom, rect.min));
            match result {
                Ok(shapes) => {
                    egui_paint::paint(&painter, &shapes);
                    self.render_succeeded();
                }
                Err(err) => self.render_failed(&err),
            }
        });
    }

    fn toggle_loading(&mut self, ctx: &egui::Context) {
        self.loading = !self.loading;
        let repaint = if self.loading {
            match self.overlay.show_loading(&self.settings) {
                Ok(repaint) => repaint,
                Err(err) => {
                    self.report(format!("Cannot show loading message: {err}"));
                    false
                }
            }
        } else {
            self.overlay.hide_loading()
        };
        if repaint {
            ctx.request_repaint();
        }
    }

    fn toggle_recording(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let repaint = if self.clock.is_running() {
            self.clock.stop(now);
            self.overlay.hide_elapsed_time()
        } else {
            self.clock.reset();
            self.clock.start(now);
            self.overlay.show_elapsed_time()
        };
        if repaint {
            ctx.request_repaint();
        }
    }

    fn reload_style(&mut self, ctx: &egui::Context) {
        let reloaded = settings::load_or_default()
            .map_err(|err| err.to_string())
            .and_then(|loaded| {
                self.overlay
                    .reset_brushes(&loaded)
                    .map(|()| loaded)
                    .map_err(|err| err.to_string())
            });
        match reloaded {
            Ok(loaded) => {
                tracing::info!("Overlay style reloaded");
                self.settings = loaded;
                self.status = None;
                ctx.request_repaint();
            }
            Err(err) => self.report(format!("Style reload failed: {err}")),
        }
    }

    fn report(&mut self, message: String) {
        if self.status.as_deref() != Some(message.as_str()) {
            tracing::warn!("{message}");
        }
        self.status = Some(message);
    }

    fn render_failed(&mut self, err: &OverlayError) {
        let message = format!("Overlay failed: {err}");
        if self.render_failure.as_deref() != Some(message.as_str()) {
            tracing::warn!("{message}");
        }
        self.render_failure = Some(message);
    }

    fn render_succeeded(&mut self) {
        if self.render_failure.take().is_some() {
            tracing::info!("Overlay rendering recovered");
        }
    }

    /// Status line text; a current render failure wins over other messages.
    fn status_text(&self) -> Option<&str> {
        self.render_failure.as_deref().or(self.status.as_deref())
    }
}

impl eframe::App for OverlayDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_controls(ctx);
        self.render_status(ctx);
        self.render_canvas(ctx);
        if self.clock.is_running() && self.overlay.refresh_elapsed_time() {
            ctx.request_repaint();
        }
    }
}

/// Stand-in waveform, stretched horizontally by the canvas zoom.
fn paint_waveform(painter: &egui::Painter, rect: Rect, zoom: f32) {
    let mid = rect.center().y;
    let amplitude = rect.height() * 0.35;
    let points: Vec<Pos2> = (0..=WAVE_POINTS)
        .map(|idx| {
            let t = idx as f32 / WAVE_POINTS as f32;
            let phase = t * WAVE_CYCLES * std::f32::consts::TAU / zoom;
            let envelope = (t * std::f32::consts::PI).sin();
            pos2(
                rect.left() + t * rect.width(),
                mid - phase.sin() * amplitude * envelope,
            )
        })
        .collect();
    painter.add(Shape::line(points, Stroke::new(1.0, Color32::from_rgb(195, 165, 122))));
    painter.line_segment(
        [pos2(rect.left(), mid), pos2(rect.right(), mid)],
        Stroke::new(1.0, Color32::from_rgb(56, 60, 66)),
    );
}
