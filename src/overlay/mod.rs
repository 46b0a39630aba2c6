//! Waveform overlay: a zoom-independent message box drawn over the canvas.

pub mod commands;
pub mod egui_paint;
pub mod error;
pub mod geometry;
pub mod host;
pub mod paint;
pub mod renderer;
pub mod screen;
pub mod transform;

pub use commands::{DrawCommand, DrawList};
pub use error::{OverlayError, StyleError};
pub use geometry::{FrameGeometry, OverlayMetrics};
pub use host::{ElapsedTimeSource, Localizer, OverlayHost, StyleKey, StyleSettings, TextMeasurer};
pub use paint::PaintResources;
pub use renderer::{Compensation, DisplayMode, FrameInputs, OverlayRenderer, Visibility};
pub use transform::{CompensatingTransform, TransformCache};
