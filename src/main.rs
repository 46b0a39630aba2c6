//! Demo window hosting the waveform overlay.
use eframe::egui;
use waveform_overlay::demo_app::{MIN_VIEWPORT_SIZE, OverlayDemoApp};
use waveform_overlay::{logging, settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 420.0])
            .with_min_inner_size(MIN_VIEWPORT_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Waveform Overlay",
        native_options,
        Box::new(|_cc| match build_app() {
            Ok(app) => Ok(Box::new(app)),
            Err(message) => {
                tracing::error!("{message}");
                Ok(Box::new(LaunchError { message }))
            }
        }),
    )?;
    Ok(())
}

fn build_app() -> Result<OverlayDemoApp, String> {
    let loaded = settings::load_or_default().map_err(|err| format!("Failed to load settings: {err}"))?;
    OverlayDemoApp::new(loaded).map_err(|err| format!("Failed to build overlay: {err}"))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start overlay demo");
                ui.label(&self.message);
            });
        });
    }
}
