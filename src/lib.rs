//! Zoom-independent loading/elapsed-time overlay for a waveform canvas.
/// Overlay renderer and its collaborator interfaces.
pub mod overlay;
/// Elapsed recording time for the overlay.
pub mod recording_clock;
/// TOML-backed overlay style and labels.
pub mod settings;
/// Per-user config and log directories.
pub mod app_dirs;
/// Tracing subscriber setup.
pub mod logging;
/// eframe host used by the binary.
pub mod demo_app;
